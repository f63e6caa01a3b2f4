#[derive(Debug, thiserror::Error)]
pub enum MiddlewareError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("설정 디코딩 오류: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("알 수 없는 미들웨어 타입: {0}")]
    UnknownType(String),
}
