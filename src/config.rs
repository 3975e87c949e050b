use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

use crate::domain::{AccessKey, Originator, ValidationError};
use crate::roster::AgentRoster;

const DEFAULT_ENV: &str = "development";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4567;
const DEFAULT_LOG_LEVEL: &str = "info";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub const API_KEY_VAR: &str = "MESSAGEBIRD_API_KEY";
pub const ORIGINATOR_VAR: &str = "MESSAGEBIRD_ORIGINATOR";
pub const SALES_AGENT_NUMBERS_VAR: &str = "SALES_AGENT_NUMBERS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("{var}: {source}")]
    Validation {
        var: &'static str,
        #[source]
        source: ValidationError,
    },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub access_key: AccessKey,
    pub originator: Originator,
    pub roster: AgentRoster,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub log_json: bool,
    pub messagebird_endpoint: Option<String>,
    pub messagebird_timeout: Option<Duration>,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// In development a `.env` file in the working directory is loaded first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_owned());
        if is_development_env(&environment) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let access_key = AccessKey::new(required(API_KEY_VAR)?).map_err(|source| {
            ConfigError::Validation {
                var: API_KEY_VAR,
                source,
            }
        })?;
        let originator = Originator::new(required(ORIGINATOR_VAR)?).map_err(|source| {
            ConfigError::Validation {
                var: ORIGINATOR_VAR,
                source,
            }
        })?;
        let roster = AgentRoster::parse(&required(SALES_AGENT_NUMBERS_VAR)?).map_err(|source| {
            ConfigError::Validation {
                var: SALES_AGENT_NUMBERS_VAR,
                source,
            }
        })?;

        let host = var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .trim()
            .parse::<IpAddr>()
            .map_err(|err| ConfigError::Invalid {
                var: "HOST",
                reason: err.to_string(),
            })?;
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|err| ConfigError::Invalid {
                var: "PORT",
                reason: err.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let log_level = var("LOG_LEVEL")
            .map(|level| level.trim().to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());
        if !VALID_LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::Invalid {
                var: "LOG_LEVEL",
                reason: "must be one of: trace, debug, info, warn, error".to_owned(),
            });
        }
        let log_json = var("LOG_JSON")
            .map(|raw| parse_bool("LOG_JSON", &raw))
            .transpose()?
            .unwrap_or(false);

        let messagebird_timeout = var("MESSAGEBIRD_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .map_err(|err| ConfigError::Invalid {
                        var: "MESSAGEBIRD_TIMEOUT_SECS",
                        reason: err.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            environment: var("APP_ENV").unwrap_or_else(|| DEFAULT_ENV.to_owned()),
            access_key,
            originator,
            roster,
            host,
            port,
            log_level,
            log_json,
            messagebird_endpoint: var("MESSAGEBIRD_ENDPOINT").map(|raw| raw.trim().to_owned()),
            messagebird_timeout,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn is_development(&self) -> bool {
        is_development_env(&self.environment)
    }
}

fn is_development_env(environment: &str) -> bool {
    environment.eq_ignore_ascii_case(DEFAULT_ENV)
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            var,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

/// Initializes tracing using the provided log level as the default filter.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let default_directive = format!("callme={level},tower_http={level}");
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name: &str| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        (API_KEY_VAR, "live_key"),
        (ORIGINATOR_VAR, "Sales"),
        (SALES_AGENT_NUMBERS_VAR, "+31611111111,+31622222222"),
    ];

    #[test]
    fn defaults_apply_when_only_required_vars_are_set() {
        let cfg = AppConfig::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(cfg.access_key.as_str(), "live_key");
        assert_eq!(cfg.originator.as_str(), "Sales");
        assert_eq!(cfg.roster.len(), 2);
        assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:4567");
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.log_json);
        assert!(cfg.is_development());
        assert_eq!(cfg.messagebird_endpoint, None);
        assert_eq!(cfg.messagebird_timeout, None);
    }

    #[test]
    fn optional_vars_override_defaults() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("APP_ENV", "production"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_JSON", "true"),
            ("MESSAGEBIRD_ENDPOINT", "http://localhost:9999/messages"),
            ("MESSAGEBIRD_TIMEOUT_SECS", "10"),
        ]);
        let cfg = AppConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.log_json);
        assert!(!cfg.is_development());
        assert_eq!(
            cfg.messagebird_endpoint.as_deref(),
            Some("http://localhost:9999/messages")
        );
        assert_eq!(cfg.messagebird_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn development_check_ignores_case() {
        assert!(is_development_env("development"));
        assert!(is_development_env("Development"));
        assert!(!is_development_env("production"));
    }

    #[test]
    fn each_required_var_is_enforced() {
        for missing in [API_KEY_VAR, ORIGINATOR_VAR, SALES_AGENT_NUMBERS_VAR] {
            let vars = REQUIRED
                .iter()
                .copied()
                .filter(|(name, _)| *name != missing)
                .collect::<Vec<_>>();
            let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(
                matches!(err, ConfigError::Missing(name) if name == missing),
                "expected {missing} to be reported, got {err:?}"
            );
        }
    }

    #[test]
    fn blank_required_var_counts_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = (API_KEY_VAR, "   ");
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(API_KEY_VAR)));
    }

    #[test]
    fn roster_without_numbers_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars[2] = (SALES_AGENT_NUMBERS_VAR, " , ,");
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                var: SALES_AGENT_NUMBERS_VAR,
                source: ValidationError::Empty { .. }
            }
        ));
    }

    #[test]
    fn invalid_originator_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = (ORIGINATOR_VAR, "ThisIsTooLongForASender");
        let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Validation {
                var: ORIGINATOR_VAR,
                source: ValidationError::InvalidOriginator { .. }
            }
        ));
    }

    #[test]
    fn malformed_optional_values_are_rejected() {
        for (name, value) in [
            ("PORT", "eighty"),
            ("HOST", "localhost:80"),
            ("LOG_LEVEL", "verbose"),
            ("LOG_JSON", "maybe"),
            ("MESSAGEBIRD_TIMEOUT_SECS", "-1"),
        ] {
            let mut vars = REQUIRED.to_vec();
            vars.push((name, value));
            let err = AppConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { var, .. } if var == name),
                "expected {name}={value} to be rejected, got {err:?}"
            );
        }
    }
}
