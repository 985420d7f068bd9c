use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use hellocurrency_common::{Config, ShopHandle};

use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "hc_session";
const SESSION_DURATION_SECS: i64 = 7 * 24 * 3600; // 7 days

/// Return the session signing secret. Prefers SESSION_SECRET env var;
/// falls back to admin_password (for dev compatibility).
pub fn session_secret(config: &Config) -> &str {
    if config.session_secret.is_empty() {
        &config.admin_password
    } else {
        &config.session_secret
    }
}

/// Authenticated merchant session carrying the shop identity. Extract this
/// in handlers that require auth; a missing or invalid session cookie
/// redirects to /login.
pub struct MerchantSession {
    pub shop: ShopHandle,
}

impl FromRequestParts<Arc<AppState>> for MerchantSession {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if let Some(value) = parse_cookie(cookie_header, COOKIE_NAME) {
            if let Some(shop) = verify_session(value, session_secret(&state.config)) {
                return Ok(MerchantSession { shop });
            }
        }

        Err(Redirect::to("/login").into_response())
    }
}

/// Create a signed session cookie value: `shop|expiry|signature`
pub fn create_session(shop: &ShopHandle, secret: &str) -> String {
    let expiry = chrono::Utc::now().timestamp() + SESSION_DURATION_SECS;
    let payload = format!("{shop}|{expiry}");
    let sig = sign(&payload, secret);
    format!("{payload}|{sig}")
}

/// Build the Set-Cookie header value.
/// In release builds, adds `Secure` flag to prevent transmission over HTTP.
pub fn session_cookie(shop: &ShopHandle, secret: &str) -> String {
    let value = create_session(shop, secret);
    let secure = if cfg!(debug_assertions) { "" } else { "; Secure" };
    format!(
        "{COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_DURATION_SECS}{secure}"
    )
}

/// Build a Set-Cookie header that clears the session.
pub fn clear_session_cookie() -> String {
    format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Verify a session cookie value. Returns the shop handle if valid.
fn verify_session(value: &str, secret: &str) -> Option<ShopHandle> {
    let parts: Vec<&str> = value.splitn(3, '|').collect();
    if parts.len() != 3 {
        return None;
    }

    let shop = parts[0];
    let expiry_str = parts[1];
    let sig = parts[2];

    let payload = format!("{shop}|{expiry_str}");
    let expected_sig = sign(&payload, secret);
    if !constant_time_eq(sig.as_bytes(), expected_sig.as_bytes()) {
        return None;
    }

    let expiry: i64 = expiry_str.parse().ok()?;
    if chrono::Utc::now().timestamp() > expiry {
        return None;
    }

    ShopHandle::parse(shop).ok()
}

fn sign(payload: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time comparison to prevent timing attacks.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Parse a specific cookie from the Cookie header string.
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim).find_map(|part| {
        part.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopHandle {
        ShopHandle::parse("teststorecvd").unwrap()
    }

    #[test]
    fn roundtrip_session() {
        let secret = "test-secret-key";
        let cookie_value = create_session(&shop(), secret);
        assert_eq!(verify_session(&cookie_value, secret), Some(shop()));
    }

    #[test]
    fn rejects_tampered_session() {
        let secret = "test-secret-key";
        let cookie_value = create_session(&shop(), secret);
        let tampered = cookie_value.replacen("teststorecvd", "otherstore", 1);
        assert_eq!(verify_session(&tampered, secret), None);
    }

    #[test]
    fn rejects_wrong_secret() {
        let cookie_value = create_session(&shop(), "secret-a");
        assert_eq!(verify_session(&cookie_value, "secret-b"), None);
    }

    #[test]
    fn rejects_expired_session() {
        let secret = "test-secret";
        let expiry = chrono::Utc::now().timestamp() - 100;
        let payload = format!("teststorecvd|{expiry}");
        let sig = sign(&payload, secret);
        let value = format!("{payload}|{sig}");
        assert_eq!(verify_session(&value, secret), None);
    }

    #[test]
    fn parse_cookie_works() {
        assert_eq!(
            parse_cookie("hc_session=abc123; other=xyz", "hc_session"),
            Some("abc123")
        );
        assert_eq!(
            parse_cookie("other=xyz; hc_session=abc123", "hc_session"),
            Some("abc123")
        );
        assert_eq!(parse_cookie("other=xyz", "hc_session"), None);
    }
}
