use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// 경계 토큰을 만들 때 사용하는 랜덤 바이트 수
pub const BOUNDARY_BYTES: usize = 30;

/// OS 보안 난수원으로 멀티파트 경계 토큰을 생성합니다.
///
/// 난수원을 읽을 수 없으면 패닉합니다. 정상적인 호스트에서는 발생하지 않으며,
/// 발생했다면 환경 자체가 손상된 것입니다.
pub fn random_boundary() -> String {
    boundary_from_rng(&mut OsRng)
}

/// 주어진 난수원으로 60자리 소문자 16진수 경계 토큰을 생성합니다.
pub fn boundary_from_rng<R>(rng: &mut R) -> String
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut buf = [0u8; BOUNDARY_BYTES];
    rng.fill_bytes(&mut buf);
    hex::encode(buf)
}
