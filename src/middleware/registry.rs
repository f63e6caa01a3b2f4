use super::{body, Middleware, MiddlewareError, Scope};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// JSON 설정 문서로부터 미들웨어를 만드는 팩토리 함수
pub type ModifierFactory = fn(&[u8]) -> Result<ParsedModifier, MiddlewareError>;

/// 팩토리가 생성한 미들웨어와 연결될 단계
#[derive(Clone)]
pub struct ParsedModifier {
    pub middleware: Arc<dyn Middleware>,
    pub scope: Vec<Scope>,
}

impl ParsedModifier {
    /// scope가 `None`이면 요청과 응답 모두로 간주합니다.
    pub fn new<M: Middleware + 'static>(middleware: M, scope: Option<Vec<Scope>>) -> Self {
        Self {
            middleware: Arc::new(middleware),
            scope: Scope::or_default(scope),
        }
    }

    pub fn applies_to(&self, scope: Scope) -> bool {
        self.scope.contains(&scope)
    }
}

impl std::fmt::Debug for ParsedModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedModifier")
            .field("middleware", &self.middleware.name())
            .field("scope", &self.scope)
            .finish()
    }
}

/// 타입 이름으로 팩토리를 찾는 레지스트리
#[derive(Clone)]
pub struct ModifierRegistry {
    factories: HashMap<String, ModifierFactory>,
}

impl ModifierRegistry {
    /// 아무 것도 등록되지 않은 레지스트리
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, factory: ModifierFactory) {
        let name = name.into();
        debug!(name = %name, "미들웨어 타입 등록");
        self.factories.insert(name, factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// 이름에 해당하는 팩토리로 미들웨어를 생성합니다.
    pub fn build(&self, name: &str, config: &[u8]) -> Result<ParsedModifier, MiddlewareError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| MiddlewareError::UnknownType(name.to_string()))?;
        factory(config)
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        body::register(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &[u8] = br#"{"scope":["response"],"contentType":"text/plain","body":"aGVsbG8="}"#;

    #[test]
    fn test_default_registers_both_aliases() {
        let registry = ModifierRegistry::default();

        let parsed = registry.build("body.Modifier", CONFIG).unwrap();
        assert_eq!(parsed.middleware.name(), "body.Modifier");
        assert_eq!(parsed.scope, vec![Scope::Response]);

        let parsed = registry.build("body.ErrorModifier", CONFIG).unwrap();
        assert_eq!(parsed.middleware.name(), "body.ErrorModifier");
        assert!(!parsed.applies_to(Scope::Request));
    }

    #[test]
    fn test_unknown_type() {
        let registry = ModifierRegistry::default();
        let result = registry.build("header.Modifier", CONFIG);
        assert!(matches!(result, Err(MiddlewareError::UnknownType(name)) if name == "header.Modifier"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ModifierRegistry::empty();
        assert!(!registry.contains("body.Modifier"));
        assert!(registry.build("body.Modifier", CONFIG).is_err());
    }
}
