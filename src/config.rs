use crate::domain::error::DomainError;

pub const DEFAULT_DB_PATH: &str = "./mandiwatch.db";

/// Runtime settings read from `MANDIWATCH_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_path: String,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    /// Fixed seed for the synthetic price history; random when unset.
    pub history_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            user_email: None,
            user_name: None,
            history_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let history_seed = lookup("MANDIWATCH_HISTORY_SEED")
            .map(|s| {
                s.trim().parse::<u64>().map_err(|e| {
                    DomainError::Validation(format!("MANDIWATCH_HISTORY_SEED '{s}': {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            db_path: lookup("MANDIWATCH_DB").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            user_email: lookup("MANDIWATCH_USER_EMAIL"),
            user_name: lookup("MANDIWATCH_USER_NAME"),
            history_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("MANDIWATCH_DB", "/tmp/m.db"),
            ("MANDIWATCH_USER_EMAIL", "kisan@example.com"),
            ("MANDIWATCH_HISTORY_SEED", "99"),
        ]))
        .unwrap();
        assert_eq!(config.db_path, "/tmp/m.db");
        assert_eq!(config.user_email.as_deref(), Some("kisan@example.com"));
        assert_eq!(config.history_seed, Some(99));
    }

    #[test]
    fn test_bad_seed() {
        assert!(Config::from_lookup(lookup(&[("MANDIWATCH_HISTORY_SEED", "soon")])).is_err());
    }
}
