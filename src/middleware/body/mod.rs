//! 바디 교체 미들웨어
//!
//! 설정된 정적 페이로드와 Content-Type으로 가로챈 HTTP 메시지의 바디를 덮어씁니다.

mod boundary;
mod config;
mod middleware;

pub use boundary::{boundary_from_rng, random_boundary, BOUNDARY_BYTES};
pub use config::BodyConfig;
pub use middleware::{BodyModifier, ModifierKind};

use super::{MiddlewareError, ModifierRegistry, ParsedModifier};

/// 두 등록 이름을 레지스트리에 추가합니다. 둘은 같은 타입의 별칭입니다.
pub fn register(registry: &mut ModifierRegistry) {
    registry.register(ModifierKind::Body.type_name(), body_modifier_from_json);
    registry.register(ModifierKind::Error.type_name(), error_modifier_from_json);
}

fn body_modifier_from_json(config: &[u8]) -> Result<ParsedModifier, MiddlewareError> {
    BodyModifier::from_json(config, ModifierKind::Body)
}

fn error_modifier_from_json(config: &[u8]) -> Result<ParsedModifier, MiddlewareError> {
    BodyModifier::from_json(config, ModifierKind::Error)
}
