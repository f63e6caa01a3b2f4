//! 가로채기 프록시를 위한 바디 교체 미들웨어입니다.
//!
//! # 주요 기능
//!
//! - 설정된 정적 페이로드로 요청 바디 교체
//! - 응답 바디 JSON 진단 로깅
//! - 멀티파트 range 응답용 경계 토큰 생성
//!
//! # 예제
//!
//! ```
//! use proxy_body_modifier::middleware::{ModifierRegistry, Scope};
//!
//! let registry = ModifierRegistry::default();
//!
//! // "hello"를 base64로 인코딩한 페이로드
//! let parsed = registry
//!     .build(
//!         "body.Modifier",
//!         br#"{"scope":["request"],"contentType":"text/plain","body":"aGVsbG8="}"#,
//!     )
//!     .unwrap();
//!
//! assert!(parsed.applies_to(Scope::Request));
//! assert!(!parsed.applies_to(Scope::Response));
//! ```
//!
//! # 체인 구성
//!
//! ```
//! use proxy_body_modifier::middleware::{MiddlewareChain, ModifierRegistry};
//!
//! let registry = ModifierRegistry::default();
//! let mut chain = MiddlewareChain::new();
//!
//! // scope를 생략하면 요청과 응답 모두에 연결됨
//! let parsed = registry
//!     .build("body.ErrorModifier", br#"{"contentType":"application/json","body":"e30="}"#)
//!     .unwrap();
//! chain.add_parsed(parsed);
//!
//! assert_eq!(chain.request_len(), 1);
//! assert_eq!(chain.response_len(), 1);
//! ```

pub mod logging;
pub mod middleware;
pub mod settings;
