use std::env;

use anyhow::{Result, bail};

#[derive(Debug, Clone)]
pub struct Config {
    /// Include draft routes in the navigation view. Off in production.
    pub show_draft_routes: bool,
    /// Optional base URL for absolute hrefs in the manifest. Normalized to
    /// have no trailing slash.
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let show_draft_routes = match env::var("SHOW_DRAFT_ROUTES") {
            Ok(raw) => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => bail!("SHOW_DRAFT_ROUTES must be one of: true, false, 1, 0 (got '{raw}')"),
            },
            Err(_) => false,
        };

        let base_url = env::var("BASE_URL").ok().and_then(|raw| {
            let trimmed = raw.trim_end_matches('/');
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        });

        Ok(Config {
            show_draft_routes,
            base_url,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Draft routes: {}",
            if self.show_draft_routes {
                "visible"
            } else {
                "hidden"
            }
        );
        tracing::info!(
            "  Base URL: {}",
            self.base_url.as_deref().unwrap_or("none (relative hrefs)")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Tests mutate process-wide env vars, so they must not interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("SHOW_DRAFT_ROUTES");
            env::remove_var("BASE_URL");
        }
        guard
    }

    #[test]
    fn test_config_defaults() {
        let _guard = clear_env_vars();

        let config = Config::from_env().unwrap();

        assert!(!config.show_draft_routes);
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SHOW_DRAFT_ROUTES", "true");
            env::set_var("BASE_URL", "https://app.example.com");
        }

        let config = Config::from_env().unwrap();

        assert!(config.show_draft_routes);
        assert_eq!(
            config.base_url,
            Some("https://app.example.com".to_string())
        );
    }

    #[test]
    fn test_show_draft_routes_accepts_numeric_and_mixed_case() {
        let _guard = clear_env_vars();

        for (raw, expected) in [("1", true), ("0", false), ("TRUE", true), ("False", false)] {
            unsafe {
                env::set_var("SHOW_DRAFT_ROUTES", raw);
            }
            let config = Config::from_env().unwrap();
            assert_eq!(config.show_draft_routes, expected, "raw value: {raw}");
        }
    }

    #[test]
    fn test_invalid_show_draft_routes() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("SHOW_DRAFT_ROUTES", "maybe");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SHOW_DRAFT_ROUTES"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("BASE_URL", "https://app.example.com/");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.base_url,
            Some("https://app.example.com".to_string())
        );
    }

    #[test]
    fn test_empty_base_url_means_relative_hrefs() {
        let _guard = clear_env_vars();
        unsafe {
            env::set_var("BASE_URL", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.base_url, None);
    }
}
