//! Secure credential storage via the system keychain.
//!
//! Provides functions to load, save, and check the API key stored in
//! the system keychain. At startup, [`populate_env_from_keychain`]
//! copies any stored credentials into environment variables so the
//! existing config flow picks them up transparently.

use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Keychain service name used for all stored credentials.
const SERVICE: &str = "harshad";

/// Known API credential keys managed by this module.
#[derive(Clone, Copy, Debug)]
pub enum CredentialKey {
    GeminiApiKey,
}

impl CredentialKey {
    /// Returns the keychain entry identifier.
    pub fn keyring_id(self) -> &'static str {
        match self {
            Self::GeminiApiKey => "gemini_api_key",
        }
    }

    /// Returns the environment variable name for this credential.
    pub fn env_var(self) -> &'static str {
        match self {
            Self::GeminiApiKey => "GEMINI_API_KEY",
        }
    }

    /// All credential keys managed by this module.
    pub const ALL: [CredentialKey; 1] = [Self::GeminiApiKey];
}

/// Loads a credential from the keychain, returning `None` if not set.
pub fn load(key: CredentialKey) -> Option<Zeroizing<String>> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id()).ok()?;
    match entry.get_password() {
        Ok(password) => Some(Zeroizing::new(password)),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(key = key.keyring_id(), error = %e, "failed to read keychain entry");
            None
        }
    }
}

/// Saves a credential to the keychain.
pub fn save(key: CredentialKey, value: &str) -> crate::Result<()> {
    let entry = keyring::Entry::new(SERVICE, key.keyring_id())
        .map_err(|e| crate::HarshadError::Config(format!("keyring entry error: {e}")))?;
    entry
        .set_password(value)
        .map_err(|e| crate::HarshadError::Config(format!("failed to save to keychain: {e}")))
}

/// Checks whether a credential exists in the keychain.
pub fn is_set(key: CredentialKey) -> bool {
    load(key).is_some()
}

/// Populates environment variables from the keychain for any
/// credentials not already set in the environment.
///
/// Call this at startup before [`crate::config::fetch_config`].
pub fn populate_env_from_keychain() {
    for key in CredentialKey::ALL {
        if std::env::var(key.env_var()).is_err()
            && let Some(value) = load(key)
        {
            debug!(key = key.env_var(), "loaded credential from keychain");
            // SAFETY: single-threaded at this point (before tokio runtime starts tasks)
            unsafe {
                std::env::set_var(key.env_var(), value.as_str());
            }
        }
    }
}
