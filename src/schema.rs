//! Hand-maintained response schema for the snapshot payload.
//!
//! Mirrors the structs in [`crate::models`] one field for one field. The
//! provider is instructed to produce JSON matching this schema, so the
//! names here are the wire contract: a struct field and its schema entry
//! must change together.

use serde_json::{Value, json};

/// Full response schema sent with every `generateContent` request.
///
/// Type tags use the provider's uppercase names (`STRING`, `NUMBER`,
/// `BOOLEAN`, `ARRAY`, `OBJECT`), and every nesting level carries a
/// `required` list so the provider cannot omit a section.
pub fn market_snapshot_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "date": { "type": "STRING" },
            "indices": {
                "type": "OBJECT",
                "properties": {
                    "nifty50": quote_schema(),
                    "sensex": quote_schema(),
                    "niftyBank": quote_schema(),
                },
                "required": ["nifty50", "sensex", "niftyBank"],
            },
            "commodities": {
                "type": "OBJECT",
                "properties": {
                    "gold": quote_schema(),
                    "oil": quote_schema(),
                    "usdInr": quote_schema(),
                },
                "required": ["gold", "oil", "usdInr"],
            },
            "gainers": movement_list_schema(),
            "losers": movement_list_schema(),
            "advanceDecline": {
                "type": "OBJECT",
                "properties": {
                    "advances": { "type": "NUMBER" },
                    "declines": { "type": "NUMBER" },
                    "advancePercent": { "type": "STRING" },
                    "declinePercent": { "type": "STRING" },
                },
                "required": ["advances", "declines", "advancePercent", "declinePercent"],
            },
            "fii": institutional_flow_schema(),
            "dii": institutional_flow_schema(),
        },
        "required": [
            "date", "indices", "commodities", "gainers", "losers",
            "advanceDecline", "fii", "dii",
        ],
    })
}

/// Schema for one quoted instrument (index, commodity, or FX pair).
fn quote_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "value": { "type": "STRING" },
            "change": { "type": "STRING" },
            "percentChange": { "type": "STRING" },
            "isPositive": { "type": "BOOLEAN" },
        },
        "required": ["value", "change", "percentChange", "isPositive"],
    })
}

/// Schema for a ranked gainers/losers list.
fn movement_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "company": { "type": "STRING" },
                "price": { "type": "STRING" },
                "percentChange": { "type": "STRING" },
            },
            "required": ["company", "price", "percentChange"],
        },
    })
}

/// Schema for one institution's daily and month-to-date flow figures.
fn institutional_flow_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "daily": flow_figures_schema(),
            "mtd": flow_figures_schema(),
        },
        "required": ["daily", "mtd"],
    })
}

fn flow_figures_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "grossPurchase": { "type": "STRING" },
            "grossSales": { "type": "STRING" },
            "net": { "type": "STRING" },
        },
        "required": ["grossPurchase", "grossSales", "net"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_contract_matches_wire_names() {
        let schema = market_snapshot_schema();
        let props = schema["properties"].as_object().unwrap();

        for field in [
            "date",
            "indices",
            "commodities",
            "gainers",
            "losers",
            "advanceDecline",
            "fii",
            "dii",
        ] {
            assert!(props.contains_key(field), "schema is missing '{field}'");
        }
        assert_eq!(schema["required"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn every_nesting_level_lists_required_fields() {
        let schema = market_snapshot_schema();

        assert_eq!(
            schema["properties"]["indices"]["required"],
            json!(["nifty50", "sensex", "niftyBank"])
        );
        assert_eq!(
            schema["properties"]["commodities"]["required"],
            json!(["gold", "oil", "usdInr"])
        );
        assert_eq!(
            schema["properties"]["gainers"]["items"]["required"],
            json!(["company", "price", "percentChange"])
        );
        assert_eq!(
            schema["properties"]["fii"]["required"],
            json!(["daily", "mtd"])
        );
        assert_eq!(
            schema["properties"]["dii"]["properties"]["mtd"]["required"],
            json!(["grossPurchase", "grossSales", "net"])
        );
    }

    #[test]
    fn field_types_use_provider_type_tags() {
        let schema = market_snapshot_schema();
        let nifty = &schema["properties"]["indices"]["properties"]["nifty50"];

        assert_eq!(nifty["properties"]["value"]["type"], "STRING");
        assert_eq!(nifty["properties"]["isPositive"]["type"], "BOOLEAN");
        assert_eq!(
            schema["properties"]["advanceDecline"]["properties"]["advances"]["type"],
            "NUMBER"
        );
        assert_eq!(schema["properties"]["gainers"]["type"], "ARRAY");
    }
}
