use log::LevelFilter;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Build-time configuration, read from the environment `trunk`/`cargo`
/// compiles under.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub token_key: String,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("RAND_API_URL"), option_env!("RAND_LOG_LEVEL"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base,
            token_key: "auth_token".to_string(),
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_values(None, None);

        assert_eq!(config.api_base, "/api");
        assert_eq!(config.token_key, "auth_token");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_config_from_values() {
        let config = Config::from_values(Some("https://api.example.com/api/"), Some("debug"));

        assert_eq!(config.api_base, "https://api.example.com/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_config_ignores_blank_and_invalid() {
        let config = Config::from_values(Some("   "), Some("loud"));

        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
