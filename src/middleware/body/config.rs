use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;
use serde::{de, Deserialize, Deserializer};
use crate::middleware::config::Scope;
use crate::middleware::MiddlewareError;

/// 바디 교체 미들웨어 설정
///
/// # JSON 예시
/// ```json
/// {
///   "scope": ["request", "response"],
///   "contentType": "text/plain",
///   "body": "c29tZSBkYXRhIHdpdGggACBhbmQg77u/"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyConfig {
    /// 교체된 메시지의 Content-Type 헤더 값
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub content_type: String,

    /// 교체할 바디. 설정 문서에서는 base64 문자열입니다.
    #[serde(default, deserialize_with = "deserialize_base64")]
    pub body: Bytes,

    /// 연결할 파이프라인 단계. 생략하거나 `null`이면 `None`입니다.
    #[serde(default)]
    pub scope: Option<Vec<Scope>>,
}

impl BodyConfig {
    /// JSON 설정 문서를 파싱합니다.
    pub fn from_json(config: &[u8]) -> Result<Self, MiddlewareError> {
        Ok(serde_json::from_slice(config)?)
    }
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Bytes, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(encoded) => STANDARD
            .decode(encoded.as_bytes())
            .map(Bytes::from)
            .map_err(|e| de::Error::custom(format!("body is not valid base64: {}", e))),
        None => Ok(Bytes::new()),
    }
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
