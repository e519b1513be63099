//! 构建期配置
//!
//! 值来自编译时环境变量，读不到就用默认值。

use log::LevelFilter;
use trainingdiary::BackendConfig;

const DEFAULT_BACKEND_URL: &str = "http://localhost:54321";
const DEFAULT_ANON_KEY: &str = "";
/// 初次会话拉取的超时，超时后按未登录处理
const DEFAULT_AUTH_TIMEOUT_MS: u32 = 8_000;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub auth_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TRAININGDIARY_BACKEND_URL"),
            option_env!("TRAININGDIARY_ANON_KEY"),
            option_env!("TRAININGDIARY_AUTH_TIMEOUT_MS"),
            option_env!("TRAININGDIARY_LOG"),
        )
    }

    fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            backend: BackendConfig::new(
                url.filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL),
                anon_key.unwrap_or(DEFAULT_ANON_KEY),
            ),
            auth_timeout_ms: timeout_ms
                .and_then(|v| v.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_AUTH_TIMEOUT_MS),
            log_level: log_level
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(config.auth_timeout_ms, DEFAULT_AUTH_TIMEOUT_MS);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = AppConfig::from_values(Some(""), Some("k"), Some("soon"), Some("loud"));
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert_eq!(config.auth_timeout_ms, DEFAULT_AUTH_TIMEOUT_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        let config = AppConfig::from_values(None, None, Some("0"), Some("debug"));
        assert_eq!(config.auth_timeout_ms, DEFAULT_AUTH_TIMEOUT_MS);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn backend_url_is_trimmed() {
        let config =
            AppConfig::from_values(Some("https://x.example.co/"), Some("anon"), Some("2500"), None);
        assert_eq!(config.backend.url, "https://x.example.co");
        assert_eq!(config.backend.anon_key, "anon");
        assert_eq!(config.auth_timeout_ms, 2500);
    }
}
