use tracing::{debug, error};
use super::{MiddlewareChain, MiddlewareConfig, MiddlewareError, ModifierRegistry, ParsedModifier, Request, Response};
use std::collections::HashMap;

/// 미들웨어 설정으로부터 미들웨어 인스턴스를 생성합니다.
fn create_middleware(
    registry: &ModifierRegistry,
    config: &MiddlewareConfig,
) -> Result<ParsedModifier, MiddlewareError> {
    debug!("미들웨어 생성 시작: type={}, settings={:?}", config.middleware_type, config.settings);

    let settings = config.settings_json()?;
    let parsed = registry.build(&config.middleware_type, &settings)?;
    debug!("생성된 미들웨어: {:?}", parsed);

    Ok(parsed)
}

/// 순서대로 정렬하고 실패한 설정은 건너뛰며 체인을 구성합니다.
fn build_chain<'a, I>(registry: &ModifierRegistry, configs: I) -> MiddlewareChain
where
    I: IntoIterator<Item = (&'a String, &'a MiddlewareConfig)>,
{
    let mut chain = MiddlewareChain::new();

    let mut ordered_configs: Vec<_> = configs.into_iter()
        .filter(|(_, config)| config.enabled)
        .collect();
    ordered_configs.sort_by(|(a_name, a), (b_name, b)| a.order.cmp(&b.order).then_with(|| a_name.cmp(b_name)));

    for (name, config) in ordered_configs {
        match create_middleware(registry, config) {
            Ok(parsed) => chain.add_parsed(parsed),
            Err(e) => {
                error!("미들웨어 생성 실패: name={}, error={}", name, e);
                continue;
            }
        }
    }

    chain
}

#[derive(Default, Clone)]
pub struct MiddlewareManager {
    registry: ModifierRegistry,
    chain: MiddlewareChain,
}

impl MiddlewareManager {
    /// 기본 레지스트리로 매니저를 생성합니다.
    pub fn new(middleware_configs: &HashMap<String, MiddlewareConfig>) -> Self {
        Self::with_registry(ModifierRegistry::default(), middleware_configs)
    }

    pub fn with_registry(registry: ModifierRegistry, middleware_configs: &HashMap<String, MiddlewareConfig>) -> Self {
        let chain = build_chain(&registry, middleware_configs);
        Self { registry, chain }
    }

    pub fn chain(&self) -> &MiddlewareChain {
        &self.chain
    }

    pub async fn handle_request(&self, req: Request) -> Result<Request, MiddlewareError> {
        self.chain.handle_request(req).await
    }

    pub async fn handle_response(&self, res: Response) -> Result<Response, MiddlewareError> {
        self.chain.handle_response(res).await
    }

    pub fn update_configs(&mut self, configs: &[(String, MiddlewareConfig)]) {
        self.chain = build_chain(&self.registry, configs.iter().map(|(name, config)| (name, config)));
    }
}
