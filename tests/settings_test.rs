use proxy_body_modifier::settings::logging::{LogFormat, LogOutput};
use proxy_body_modifier::settings::{Settings, SettingsError};
use tracing::Level;

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn cleanup_env() {
        std::env::remove_var("PROXY_CONFIG_FILE");
        std::env::remove_var("PROXY_LOG_FORMAT");
        std::env::remove_var("PROXY_LOG_LEVEL");
        std::env::remove_var("PROXY_LOG_OUTPUT");
    }

    // 테스트용 임시 TOML 파일 생성 헬퍼
    fn create_test_toml(content: &str) -> (String, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");
        std::fs::write(&file_path, content).unwrap();
        (file_path.to_str().unwrap().to_string(), dir)
    }

    const CONFIG: &str = r#"
        [logging]
        format = "json"
        level = "debug"

        [middlewares.hello]
        middleware_type = "body.Modifier"
        order = 1

        [middlewares.hello.settings]
        scope = ["request"]
        contentType = "text/plain"
        body = "aGVsbG8="

        [middlewares.errors]
        middleware_type = "body.ErrorModifier"
        enabled = false
    "#;

    #[tokio::test]
    #[serial]
    async fn test_load_from_config_file() {
        cleanup_env();
        let (path, _dir) = create_test_toml(CONFIG);
        std::env::set_var("PROXY_CONFIG_FILE", &path);

        let settings = Settings::load().await.unwrap();
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, Level::DEBUG);
        assert_eq!(settings.middlewares.len(), 2);

        let hello = &settings.middlewares["hello"];
        assert_eq!(hello.middleware_type, "body.Modifier");
        assert_eq!(hello.order, 1);
        assert!(!settings.middlewares["errors"].enabled);

        let manager = settings.middleware_manager();
        assert_eq!(manager.chain().request_len(), 1);
        assert_eq!(manager.chain().response_len(), 0);

        cleanup_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_load_from_env() {
        cleanup_env();
        std::env::set_var("PROXY_LOG_FORMAT", "json");
        std::env::set_var("PROXY_LOG_LEVEL", "warn");
        std::env::set_var("PROXY_LOG_OUTPUT", "/tmp/proxy.log");

        let settings = Settings::load().await.unwrap();
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, Level::WARN);
        assert_eq!(settings.logging.output, LogOutput::File("/tmp/proxy.log".to_string()));
        assert!(settings.middlewares.is_empty());

        cleanup_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_env_values() {
        cleanup_env();

        std::env::set_var("PROXY_LOG_LEVEL", "invalid_level");
        assert!(matches!(Settings::from_env(), Err(SettingsError::EnvVarInvalid { .. })));
        cleanup_env();

        std::env::set_var("PROXY_LOG_FORMAT", "xml");
        assert!(matches!(Settings::from_env(), Err(SettingsError::EnvVarInvalid { .. })));
        cleanup_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_config_file() {
        cleanup_env();
        let result = Settings::from_toml_file("/nonexistent/proxy.toml").await;
        assert!(matches!(result, Err(SettingsError::FileError { .. })));
    }

    #[test]
    fn test_unregistered_middleware_type() {
        let result = Settings::from_toml_str(r#"
            [middlewares.x]
            middleware_type = "header.Modifier"
        "#);
        assert!(matches!(result, Err(SettingsError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = Settings::from_toml_str("[middlewares.x");
        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }

    #[test]
    fn test_duplicate_middleware() {
        let mut settings = Settings::from_toml_str(CONFIG).unwrap();
        let hello = settings.middlewares["hello"].clone();
        assert!(matches!(
            settings.add_middleware("hello".to_string(), hello.clone()),
            Err(SettingsError::DuplicateMiddleware(_))
        ));
        assert!(settings.add_middleware("hello-2".to_string(), hello).is_ok());
    }
}
