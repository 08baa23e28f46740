use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};
use compound_core::constants::DEFAULT_ANNUAL_RATE_PERCENT;
use compound_core::FieldConstraints;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub annual_rate_percent: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            static_dir: "dist".to_string(),
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from a variable lookup; unset variables keep their
    /// defaults, malformed or out-of-range ones are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("CALC_LISTEN_ADDR") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid CALC_LISTEN_ADDR: {}", raw))?,
            None => defaults.listen_addr,
        };
        let cors_allow = match lookup("CALC_CORS_ALLOW_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_allow,
        };
        let request_timeout = match lookup("CALC_REQUEST_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid CALC_REQUEST_TIMEOUT_MS: {}", raw))?;
                Duration::from_millis(ms)
            }
            None => defaults.request_timeout,
        };
        let static_dir = lookup("CALC_STATIC_DIR").unwrap_or(defaults.static_dir);
        let annual_rate_percent = match lookup("CALC_ANNUAL_RATE_PERCENT") {
            Some(raw) => Decimal::from_str(raw.trim())
                .with_context(|| format!("Invalid CALC_ANNUAL_RATE_PERCENT: {}", raw))?,
            None => defaults.annual_rate_percent,
        };
        let rate_bounds = FieldConstraints::default().annual_rate_percent;
        if !rate_bounds.contains(annual_rate_percent) {
            bail!(
                "CALC_ANNUAL_RATE_PERCENT must be between {} and {}, got {}",
                rate_bounds.min.normalize(),
                rate_bounds.max.normalize(),
                annual_rate_percent
            );
        }

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            static_dir,
            annual_rate_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.listen_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.cors_allow, vec!["*".to_string()]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.annual_rate_percent, dec!(7));
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_with(&[
            ("CALC_LISTEN_ADDR", "127.0.0.1:9000"),
            ("CALC_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test"),
            ("CALC_REQUEST_TIMEOUT_MS", "1500"),
            ("CALC_ANNUAL_RATE_PERCENT", "25"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
        assert_eq!(config.annual_rate_percent, dec!(25));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let err = config_with(&[("CALC_REQUEST_TIMEOUT_MS", "thirty-seconds")]).unwrap_err();
        assert!(err.to_string().contains("CALC_REQUEST_TIMEOUT_MS"));
    }

    #[test]
    fn test_rate_outside_bounds_is_an_error() {
        for raw in ["-500", "25.01"] {
            let err = config_with(&[("CALC_ANNUAL_RATE_PERCENT", raw)]).unwrap_err();
            assert!(
                err.to_string().contains("must be between 0 and 25"),
                "{raw}: {err}"
            );
        }
        assert!(config_with(&[("CALC_ANNUAL_RATE_PERCENT", "0")]).is_ok());
    }
}
