use std::{collections::HashMap, env, path::Path};
use serde::Deserialize;
use tracing::{debug, info};
use crate::middleware::{MiddlewareConfig, MiddlewareManager, ModifierRegistry};

pub mod logging;
mod error;

pub use logging::LogSettings;
pub use error::SettingsError;

pub type Result<T> = std::result::Result<T, SettingsError>;

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_FILE_ENV: &str = "PROXY_CONFIG_FILE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    // 로깅 설정
    #[serde(default)]
    pub logging: LogSettings,

    /// 미들웨어 설정
    #[serde(default)]
    pub middlewares: HashMap<String, MiddlewareConfig>,
}

impl Settings {
    pub async fn load() -> Result<Self> {
        if let Ok(config_path) = env::var(CONFIG_FILE_ENV) {
            Self::from_toml_file(&config_path).await
        } else {
            Self::from_env()
        }
    }

    pub async fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await.map_err(|e| SettingsError::FileError {
            path: path.as_ref().to_string_lossy().to_string(),
            error: e,
        })?;

        info!(path = %path.as_ref().display(), "설정 파일 로드");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::ParseError { source: e })?;

        settings.validate(&ModifierRegistry::default())?;
        Ok(settings)
    }

    /// 미들웨어 설정 없이 환경 변수에서 로깅 설정만 읽습니다.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            logging: LogSettings::from_env()?,
            middlewares: HashMap::new(),
        })
    }

    /// 활성화된 미들웨어의 타입이 레지스트리에 등록되어 있는지 검증
    pub fn validate(&self, registry: &ModifierRegistry) -> Result<()> {
        for (name, middleware) in &self.middlewares {
            if middleware.enabled && !registry.contains(&middleware.middleware_type) {
                return Err(SettingsError::InvalidConfig(format!(
                    "미들웨어 {}의 타입 {}이(가) 등록되어 있지 않습니다",
                    name, middleware.middleware_type
                )));
            }
        }
        Ok(())
    }

    pub fn add_middleware(&mut self, name: String, config: MiddlewareConfig) -> Result<()> {
        if self.middlewares.contains_key(&name) {
            return Err(SettingsError::DuplicateMiddleware(name));
        }
        debug!(name = %name, middleware_type = %config.middleware_type, "미들웨어 설정 추가");
        self.middlewares.insert(name, config);
        Ok(())
    }

    /// 설정된 미들웨어로 매니저를 구성합니다.
    pub fn middleware_manager(&self) -> MiddlewareManager {
        MiddlewareManager::new(&self.middlewares)
    }
}

pub fn parse_env_var<T: std::str::FromStr, F: FnOnce() -> T>(name: &str, default: F) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val.parse().map_err(|e: T::Err| SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: val,
            reason: e.to_string(),
        }),
        Err(env::VarError::NotPresent) => Ok(default()),
        Err(e) => Err(SettingsError::EnvVarInvalid {
            var_name: name.to_string(),
            value: "".to_string(),
            reason: e.to_string(),
        }),
    }
}
