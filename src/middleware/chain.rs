use super::{Middleware, MiddlewareError, ParsedModifier, Request, Response, Scope};
use std::sync::Arc;

/// scope별로 나뉜 미들웨어 체인
#[derive(Default, Clone)]
pub struct MiddlewareChain {
    request: Vec<Arc<dyn Middleware>>,
    response: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// 요청과 응답 단계 모두에 추가합니다.
    pub fn add<M: Middleware + 'static>(&mut self, middleware: M) {
        self.add_parsed(ParsedModifier::new(middleware, None));
    }

    /// 선언된 scope에 해당하는 단계에만 추가합니다.
    pub fn add_parsed(&mut self, parsed: ParsedModifier) {
        if parsed.applies_to(Scope::Request) {
            self.request.push(parsed.middleware.clone());
        }
        if parsed.applies_to(Scope::Response) {
            self.response.push(parsed.middleware);
        }
    }

    pub fn request_len(&self) -> usize {
        self.request.len()
    }

    pub fn response_len(&self) -> usize {
        self.response.len()
    }

    pub fn is_empty(&self) -> bool {
        self.request.is_empty() && self.response.is_empty()
    }

    pub async fn handle_request(&self, mut request: Request) -> Result<Request, MiddlewareError> {
        for middleware in &self.request {
            request = middleware.handle_request(request).await?;
        }
        Ok(request)
    }

    pub async fn handle_response(&self, mut response: Response) -> Result<Response, MiddlewareError> {
        // 응답은 역순으로 처리
        for middleware in self.response.iter().rev() {
            response = middleware.handle_response(response).await?;
        }
        Ok(response)
    }
}
