pub mod error;
pub mod types;

pub use error::{Result, ShopifyError};
pub use types::CurrencyFormats;

use hellocurrency_common::ShopHandle;
use types::{GraphqlRequest, GraphqlResponse, ShopQueryData};

/// Admin API version pinned for all requests.
const API_VERSION: &str = "2024-10";

const CURRENCY_FORMATS_QUERY: &str = "\
query {
  shop {
    currencyFormats {
      moneyFormat
      moneyWithCurrencyFormat
    }
  }
}";

pub struct ShopifyAdminClient {
    client: reqwest::Client,
    shop: ShopHandle,
    access_token: String,
}

impl ShopifyAdminClient {
    pub fn new(shop: ShopHandle, access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            shop,
            access_token,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://{}/admin/api/{API_VERSION}/graphql.json",
            self.shop.domain()
        )
    }

    /// Fetch the shop's raw money-format pair. One request, no retries.
    pub async fn currency_formats(&self) -> Result<CurrencyFormats> {
        tracing::info!(shop = %self.shop, "Fetching currency formats");

        let resp = self
            .client
            .post(self.endpoint())
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&GraphqlRequest {
                query: CURRENCY_FORMATS_QUERY,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ShopifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let envelope: GraphqlResponse<ShopQueryData> = resp.json().await?;
        if let Some(err) = envelope.errors.first() {
            return Err(ShopifyError::GraphQL(err.message.clone()));
        }

        let data = envelope
            .data
            .ok_or_else(|| ShopifyError::Parse("response missing data".to_string()))?;

        Ok(data.shop.currency_formats)
    }
}
