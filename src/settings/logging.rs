use serde::{Deserialize, Deserializer};
use std::env;
use tracing::Level;
use super::{parse_env_var, SettingsError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Text
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogOutput {
    Stdout,
    File(String),
}

impl Default for LogOutput {
    fn default() -> Self {
        LogOutput::Stdout
    }
}

impl std::str::FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("stdout") {
            Ok(LogOutput::Stdout)
        } else if s.is_empty() {
            Err("Empty log output".to_string())
        } else {
            Ok(LogOutput::File(s.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for LogOutput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: Level,
    pub output: LogOutput,
}

impl LogSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            format: parse_env_var("PROXY_LOG_FORMAT", || LogFormat::Text)?,
            level: parse_log_level(env::var("PROXY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()))?,
            output: parse_env_var("PROXY_LOG_OUTPUT", || LogOutput::Stdout)?,
        })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: Level::INFO,
            output: LogOutput::default(),
        }
    }
}

fn level_from_str(level: &str) -> Option<Level> {
    match level.to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

fn parse_log_level(level: String) -> Result<Level, SettingsError> {
    level_from_str(&level).ok_or_else(|| SettingsError::EnvVarInvalid {
        var_name: "PROXY_LOG_LEVEL".to_string(),
        value: level,
        reason: "유효하지 않은 로그 레벨".to_string(),
    })
}

impl<'de> Deserialize<'de> for LogSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Helper {
            #[serde(default)]
            format: LogFormat,
            #[serde(default = "default_log_level_string")]
            level: String,
            #[serde(default)]
            output: LogOutput,
        }

        let helper = Helper::deserialize(deserializer)?;
        let level = level_from_str(&helper.level).unwrap_or(Level::INFO);

        Ok(LogSettings {
            format: helper.format,
            level,
            output: helper.output,
        })
    }
}

fn default_log_level_string() -> String {
    "info".to_string()
}
