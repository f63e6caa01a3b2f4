use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 미들웨어가 연결될 파이프라인 단계
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Request,
    Response,
}

impl Scope {
    /// scope가 지정되지 않으면 요청과 응답 모두에 연결합니다.
    /// 빈 목록은 어느 단계에도 연결하지 않습니다.
    pub fn or_default(scope: Option<Vec<Scope>>) -> Vec<Scope> {
        scope.unwrap_or_else(|| vec![Scope::Request, Scope::Response])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// 레지스트리에 등록된 미들웨어 타입 이름 (예: `body.Modifier`)
    pub middleware_type: String,

    /// 미들웨어 활성화 여부
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// 실행 순서 (낮은 숫자가 먼저 실행)
    #[serde(default)]
    pub order: i32,

    /// 미들웨어별 설정. 팩토리에는 JSON 문서로 전달됩니다.
    #[serde(default)]
    pub settings: HashMap<String, serde_json::Value>,
}

fn default_enabled() -> bool {
    true
}

impl MiddlewareConfig {
    /// 팩토리에 넘길 JSON 설정 문서를 만듭니다.
    pub fn settings_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.settings)
    }
}
