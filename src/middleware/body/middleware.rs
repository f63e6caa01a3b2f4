use crate::middleware::{Middleware, MiddlewareError, OriginUri, ParsedModifier, Request, Response};
use super::boundary::boundary_from_rng;
use super::config::BodyConfig;
use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{self, HeaderValue};
use parking_lot::RwLock;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// 등록 이름별 응답 진단 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    /// `body.Modifier`: 디코딩 실패와 성공을 구분해 기록
    Body,
    /// `body.ErrorModifier`: 디코딩 결과와 무관하게 기록
    Error,
}

impl ModifierKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Body => "body.Modifier",
            Self::Error => "body.ErrorModifier",
        }
    }
}

/// 바디 교체 미들웨어
///
/// 요청 단계에서는 바디를 설정된 페이로드로 교체합니다. 응답 단계에서는
/// 바디를 JSON으로 디코딩해 기록만 하고 바이트는 그대로 돌려놓습니다.
#[derive(Debug)]
pub struct BodyModifier {
    kind: ModifierKind,
    content_type: String,
    content_type_value: HeaderValue,
    body: Bytes,
    boundary: RwLock<String>,
}

impl BodyModifier {
    /// OS 난수원으로 경계 토큰을 만들어 미들웨어를 생성합니다.
    pub fn new(body: impl Into<Bytes>, content_type: &str) -> Result<Self, MiddlewareError> {
        Self::with_rng(body, content_type, &mut OsRng)
    }

    /// 주어진 난수원으로 경계 토큰을 만들어 미들웨어를 생성합니다.
    pub fn with_rng<R>(
        body: impl Into<Bytes>,
        content_type: &str,
        rng: &mut R,
    ) -> Result<Self, MiddlewareError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let body = body.into();
        debug!(len = body.len(), content_type = %content_type, "body modifier 생성");

        let content_type_value = HeaderValue::from_str(content_type)
            .map_err(|e| MiddlewareError::Config(format!("invalid contentType {:?}: {}", content_type, e)))?;

        Ok(Self {
            kind: ModifierKind::Body,
            content_type: content_type.to_string(),
            content_type_value,
            body,
            boundary: RwLock::new(boundary_from_rng(rng)),
        })
    }

    pub fn with_kind(mut self, kind: ModifierKind) -> Self {
        self.kind = kind;
        self
    }

    /// JSON 설정 문서로부터 미들웨어와 scope를 생성합니다.
    pub fn from_json(config: &[u8], kind: ModifierKind) -> Result<ParsedModifier, MiddlewareError> {
        let config = BodyConfig::from_json(config)?;
        let modifier = Self::new(config.body, &config.content_type)?.with_kind(kind);
        Ok(ParsedModifier::new(modifier, config.scope))
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// 멀티파트 range 응답용 경계 토큰
    pub fn boundary(&self) -> String {
        self.boundary.read().clone()
    }

    /// 경계 토큰을 교체합니다. 형식은 검증하지 않습니다.
    pub fn set_boundary(&self, boundary: impl Into<String>) {
        *self.boundary.write() = boundary.into();
    }

    fn log_response_body(&self, origin: Option<&OriginUri>, decoded: Result<Value, serde_json::Error>) {
        let uri = origin.map(|o| o.0.to_string()).unwrap_or_default();
        match (self.kind, decoded) {
            (ModifierKind::Body, Ok(value)) => {
                debug!(modifier = self.kind.type_name(), uri = %uri, value = %value, "응답 바디 디코딩 완료");
            }
            (ModifierKind::Body, Err(e)) => {
                warn!(modifier = self.kind.type_name(), uri = %uri, error = %e, "응답 바디가 JSON이 아닙니다");
            }
            (ModifierKind::Error, decoded) => {
                debug!(modifier = self.kind.type_name(), uri = %uri, value = ?decoded.ok(), "응답 재구성");
            }
        }
    }
}

/// 바디의 첫 번째 JSON 값을 디코딩합니다.
///
/// 값 뒤에 오는 데이터는 구분자 없이 붙어 있어도 검사하지 않습니다 (`1x`는 `1`).
/// 빈 입력은 EOF 오류입니다.
pub(crate) fn decode_first_value(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    Value::deserialize(&mut deserializer)
}

#[async_trait]
impl Middleware for BodyModifier {
    fn name(&self) -> &str {
        self.kind.type_name()
    }

    async fn handle_request(&self, req: Request) -> Result<Request, MiddlewareError> {
        debug!(uri = %req.uri(), modifier = self.kind.type_name(), "요청 바디 교체");

        let (mut parts, original) = req.into_parts();
        drop(original);

        parts.headers.insert(header::CONTENT_TYPE, self.content_type_value.clone());
        // 새 바디는 인코딩되지 않았으므로 기존 Content-Encoding 제거
        parts.headers.remove(header::CONTENT_ENCODING);
        parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(self.body.len()));

        Ok(Request::from_parts(parts, Full::new(self.body.clone())))
    }

    async fn handle_response(&self, res: Response) -> Result<Response, MiddlewareError> {
        let (parts, body) = res.into_parts();
        let origin = parts.extensions.get::<OriginUri>();
        debug!(uri = ?origin.map(|o| &o.0), status = %parts.status, "응답 바디 검사");

        let bytes = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(never) => match never {},
        };

        self.log_response_body(origin, decode_first_value(&bytes));

        Ok(Response::from_parts(parts, Full::new(bytes)))
    }
}
