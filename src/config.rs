use std::env;

use anyhow::Result;

/// Base URL the link generator prepends to each celebrity name.
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://twitter.com/";

/// How many input lines the document cleaner processes between progress logs.
pub const DEFAULT_LOG_INTERVAL: usize = 10_000;

/// Settings shared by the pipeline tools, loaded from environment variables.
///
/// Command-line flags take precedence over these. The .env file is loaded
/// by each binary at startup via dotenvy, before `Config::load` runs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for profile links (PLSA_PROFILE_BASE_URL)
    pub profile_base_url: String,
    /// Progress interval for the document cleaner (PLSA_LOG_INTERVAL)
    pub log_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            log_interval: DEFAULT_LOG_INTERVAL,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default, so this only fails when a variable is set
    /// to something unusable.
    pub fn load() -> Result<Self> {
        let profile_base_url = env::var("PLSA_PROFILE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PROFILE_BASE_URL.to_string());

        let log_interval = match env::var("PLSA_LOG_INTERVAL") {
            Ok(raw) => parse_log_interval(&raw)?,
            Err(_) => DEFAULT_LOG_INTERVAL,
        };

        Ok(Self {
            profile_base_url,
            log_interval,
        })
    }

    /// Pick the progress interval: an explicit flag wins over the environment.
    pub fn log_interval_or(&self, flag: Option<usize>) -> Result<usize> {
        match flag {
            Some(0) => anyhow::bail!("--nlog must be a positive number of lines"),
            Some(n) => Ok(n),
            None => Ok(self.log_interval),
        }
    }

    /// Pick the link base URL: an explicit flag wins over the environment.
    pub fn base_url_or(&self, flag: Option<String>) -> String {
        flag.unwrap_or_else(|| self.profile_base_url.clone())
    }
}

fn parse_log_interval(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => anyhow::bail!(
            "PLSA_LOG_INTERVAL must be a positive integer, got {raw:?}"
        ),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_interval() {
        assert_eq!(parse_log_interval("500").unwrap(), 500);
        assert_eq!(parse_log_interval(" 25 ").unwrap(), 25);
        assert!(parse_log_interval("0").is_err());
        assert!(parse_log_interval("ten").is_err());
    }

    #[test]
    fn test_flag_overrides() {
        let config = Config::default();
        assert_eq!(config.log_interval_or(None).unwrap(), DEFAULT_LOG_INTERVAL);
        assert_eq!(config.log_interval_or(Some(3)).unwrap(), 3);
        assert!(config.log_interval_or(Some(0)).is_err());

        assert_eq!(config.base_url_or(None), DEFAULT_PROFILE_BASE_URL);
        assert_eq!(
            config.base_url_or(Some("https://x.com/".to_string())),
            "https://x.com/"
        );
    }
}
