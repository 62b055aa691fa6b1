//! Application configuration loaded from environment variables.
//!
//! Credentials are provided via environment variables:
//! - `GEMINI_API_KEY` — API key for the Gemini API (`API_KEY` is accepted
//!   as a fallback for deployments that still use the old name)
//!
//! Optional overrides:
//! - `GEMINI_MODEL` — model identifier used for snapshot generation
//! - `GEMINI_API_URL` — endpoint base, for proxies and test servers

/// Default endpoint base for the Gemini REST API.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for snapshot generation.
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
}

/// Gemini-specific configuration values.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

/// Loads the application configuration from environment variables.
///
/// The model and endpoint base fall back to the defaults above. The API
/// key is optional at this layer: a fetch without one goes out
/// unauthenticated and surfaces the provider's rejection instead.
///
/// # Errors
///
/// Returns [`HarshadError::Config`](crate::HarshadError::Config) if
/// `GEMINI_API_URL` is set to something that is not an http(s) URL.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url = match non_empty_var("GEMINI_API_URL") {
        Some(url) => {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(crate::HarshadError::Config(format!(
                    "GEMINI_API_URL must be an http(s) URL, got '{url}'"
                )));
            }
            url.trim_end_matches('/').to_string()
        }
        None => DEFAULT_API_URL.to_string(),
    };

    let model = non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let api_key = non_empty_var("GEMINI_API_KEY").or_else(|| non_empty_var("API_KEY"));

    Ok(AppConfig {
        gemini: GeminiConfig {
            api_url,
            model,
            api_key,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Serializes env-mutating tests so they can run under the default
    /// parallel test runner.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap();

        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: ENV_LOCK keeps env mutation single-threaded across tests.
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values under the same lock.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(
            &[
                ("GEMINI_API_KEY", None),
                ("API_KEY", None),
                ("GEMINI_MODEL", None),
                ("GEMINI_API_URL", None),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gemini.api_url, DEFAULT_API_URL);
                assert_eq!(config.gemini.model, DEFAULT_MODEL);
                assert!(config.gemini.api_key.is_none());
            },
        );
    }

    #[test]
    fn loads_key_from_env() {
        with_env(
            &[("GEMINI_API_KEY", Some("test-key")), ("API_KEY", None)],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
            },
        );
    }

    #[test]
    fn old_key_name_accepted_as_fallback() {
        with_env(
            &[("GEMINI_API_KEY", None), ("API_KEY", Some("legacy-key"))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gemini.api_key.as_deref(), Some("legacy-key"));
            },
        );
    }

    #[test]
    fn new_key_name_wins_over_old_one() {
        with_env(
            &[
                ("GEMINI_API_KEY", Some("new-key")),
                ("API_KEY", Some("legacy-key")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gemini.api_key.as_deref(), Some("new-key"));
            },
        );
    }

    #[test]
    fn custom_model_and_endpoint() {
        with_env(
            &[
                ("GEMINI_MODEL", Some("gemini-3-pro-preview")),
                ("GEMINI_API_URL", Some("https://proxy.example.com/v1beta/")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gemini.model, "gemini-3-pro-preview");
                // Trailing slash is trimmed so URL joining stays predictable.
                assert_eq!(config.gemini.api_url, "https://proxy.example.com/v1beta");
            },
        );
    }

    #[test]
    fn rejects_non_http_endpoint() {
        with_env(&[("GEMINI_API_URL", Some("ftp://example.com"))], || {
            let err = fetch_config().unwrap_err();
            assert!(err.to_string().contains("must be an http(s) URL"));
        });
    }

    #[test]
    fn empty_values_treated_as_absent() {
        with_env(
            &[
                ("GEMINI_API_KEY", Some("")),
                ("API_KEY", Some("")),
                ("GEMINI_MODEL", Some("")),
                ("GEMINI_API_URL", Some("")),
            ],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.gemini.api_url, DEFAULT_API_URL);
                assert_eq!(config.gemini.model, DEFAULT_MODEL);
                assert!(config.gemini.api_key.is_none());
            },
        );
    }
}
