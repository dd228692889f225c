//! Operator-facing configuration: gateway URL and default poll budget.
//! Mirrors `cli.py`'s `_get_url`/`--wait` defaults, minus key-file lookup
//! (this crate's signer is passed as a plain public key, per
//! `ledger-crypto`'s crate docs on the external signing boundary).

const DEFAULT_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_WAIT_SECS: u64 = 10;

/// Resolved CLI configuration for one invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the `ledger-gateway` instance to submit against.
    pub url: String,
    /// Seconds to poll batch status for before giving up, if waiting.
    pub wait_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            wait_secs: DEFAULT_WAIT_SECS,
        }
    }
}

impl CliConfig {
    /// Start from defaults, then apply `LEDGER_CLI_URL`/`LEDGER_CLI_WAIT_SECS`
    /// overrides, matching the gateway binary's env-override convention.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("LEDGER_CLI_URL") {
            config.url = url;
        }
        if let Ok(wait) = std::env::var("LEDGER_CLI_WAIT_SECS") {
            if let Ok(wait) = wait.parse() {
                config.wait_secs = wait;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_gateway() {
        let config = CliConfig::default();
        assert_eq!(config.url, "http://127.0.0.1:8080");
        assert_eq!(config.wait_secs, 10);
    }
}
