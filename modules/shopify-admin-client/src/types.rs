use serde::{Deserialize, Serialize};

/// GraphQL request envelope: `{"query": "..."}`.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
}

/// GraphQL response envelope. Shopify returns 200 with an `errors` array for
/// query-level failures, so both fields are optional.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ShopQueryData {
    pub shop: ShopNode,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopNode {
    pub currency_formats: CurrencyFormats,
}

/// Raw money-format pair as configured in the shop's admin settings.
/// Both fields are always present strings; either may contain HTML entities
/// and/or HTML tags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormats {
    pub money_format: String,
    pub money_with_currency_format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_formats_envelope() {
        let body = r#"{
            "data": {
                "shop": {
                    "currencyFormats": {
                        "moneyFormat": "${{amount}}",
                        "moneyWithCurrencyFormat": "${{amount}} USD"
                    }
                }
            }
        }"#;
        let resp: GraphqlResponse<ShopQueryData> = serde_json::from_str(body).unwrap();
        let formats = resp.data.unwrap().shop.currency_formats;
        assert_eq!(formats.money_format, "${{amount}}");
        assert_eq!(formats.money_with_currency_format, "${{amount}} USD");
        assert!(resp.errors.is_empty());
    }

    #[test]
    fn parses_error_envelope() {
        let body = r#"{"data": null, "errors": [{"message": "Access denied"}]}"#;
        let resp: GraphqlResponse<ShopQueryData> = serde_json::from_str(body).unwrap();
        assert!(resp.data.is_none());
        assert_eq!(resp.errors[0].message, "Access denied");
    }
}
