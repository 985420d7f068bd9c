use serde::{Deserialize, Serialize};

use crate::error::HelloCurrencyError;

const MYSHOPIFY_SUFFIX: &str = ".myshopify.com";

/// A validated shop handle (the store name without the `.myshopify.com`
/// suffix). Accepts either the bare handle or the full myshopify domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopHandle(String);

impl ShopHandle {
    pub fn parse(input: &str) -> Result<Self, HelloCurrencyError> {
        let mut s = input.trim();
        s = s.strip_prefix("https://").unwrap_or(s);
        s = s.strip_prefix("http://").unwrap_or(s);
        let s = s.trim_end_matches('/');
        let handle = s.strip_suffix(MYSHOPIFY_SUFFIX).unwrap_or(s).to_string();

        if handle.is_empty() {
            return Err(HelloCurrencyError::Validation(
                "shop handle is empty".to_string(),
            ));
        }
        if !handle
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(HelloCurrencyError::Validation(format!(
                "invalid shop handle: {handle}"
            )));
        }

        Ok(Self(handle))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full myshopify domain, e.g. `example.myshopify.com`.
    pub fn domain(&self) -> String {
        format!("{}{MYSHOPIFY_SUFFIX}", self.0)
    }
}

impl std::fmt::Display for ShopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_handle() {
        let shop = ShopHandle::parse("teststorecvd").unwrap();
        assert_eq!(shop.as_str(), "teststorecvd");
        assert_eq!(shop.domain(), "teststorecvd.myshopify.com");
    }

    #[test]
    fn strips_myshopify_suffix() {
        let shop = ShopHandle::parse("teststorecvd.myshopify.com").unwrap();
        assert_eq!(shop.as_str(), "teststorecvd");
    }

    #[test]
    fn strips_scheme_and_trailing_slash() {
        let shop = ShopHandle::parse("https://teststorecvd.myshopify.com/").unwrap();
        assert_eq!(shop.as_str(), "teststorecvd");
    }

    #[test]
    fn rejects_empty() {
        assert!(ShopHandle::parse("").is_err());
        assert!(ShopHandle::parse("   ").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(ShopHandle::parse("bad shop").is_err());
        assert!(ShopHandle::parse("shop.example.com").is_err());
    }

    #[test]
    fn validation_error_carries_detail() {
        let err = ShopHandle::parse("bad shop").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: invalid shop handle: bad shop"
        );
    }
}
