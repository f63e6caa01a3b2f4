pub mod body;
pub mod chain;
pub mod config;
pub mod error;
pub mod manager;
pub mod registry;
pub mod traits;

use bytes::Bytes;
use http_body_util::Full;

pub use chain::MiddlewareChain;
pub use config::{MiddlewareConfig, Scope};
pub use error::MiddlewareError;
pub use manager::MiddlewareManager;
pub use registry::{ModifierFactory, ModifierRegistry, ParsedModifier};
pub use traits::Middleware;

/// 파이프라인을 통과하는 요청
pub type Request = hyper::Request<Full<Bytes>>;

/// 파이프라인을 통과하는 응답
pub type Response = hyper::Response<Full<Bytes>>;

/// 응답 extensions에 담기는 원본 요청 URI. 로깅에만 사용됩니다.
#[derive(Debug, Clone)]
pub struct OriginUri(pub hyper::Uri);
