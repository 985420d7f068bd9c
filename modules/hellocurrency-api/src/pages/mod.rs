use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use hellocurrency_common::ShopHandle;
use hellocurrency_format::NormalizedFormats;
use shopify_admin_client::ShopifyAdminClient;

use crate::auth::{self, MerchantSession};
use crate::components::{render_dashboard, render_login, DashboardView};
use crate::links;
use crate::AppState;

pub async fn health() -> &'static str {
    "ok"
}

// --- Auth pages (no MerchantSession required) ---

pub async fn login_page() -> impl IntoResponse {
    Html(render_login(None))
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub shop: String,
    pub password: String,
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<LoginForm>,
) -> Response {
    let shop = match ShopHandle::parse(&form.shop) {
        Ok(shop) => shop,
        Err(err) => {
            return Html(render_login(Some(err.to_string()))).into_response();
        }
    };

    if !auth::constant_time_eq(
        form.password.as_bytes(),
        state.config.admin_password.as_bytes(),
    ) {
        warn!(shop = %shop, "Failed login attempt");
        return Html(render_login(Some("Incorrect password.".to_string()))).into_response();
    }

    info!(shop = %shop, "Merchant logged in");
    let cookie = auth::session_cookie(&shop, auth::session_secret(&state.config));
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to("/dashboard"),
    )
        .into_response()
}

pub async fn logout() -> Response {
    (
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response()
}

// --- Protected pages (MerchantSession required) ---

/// Fetch the session shop's raw format pair and normalize both halves.
async fn load_formats(
    state: &AppState,
    shop: &ShopHandle,
) -> Result<NormalizedFormats, Response> {
    let client = ShopifyAdminClient::new(shop.clone(), state.config.shopify_access_token.clone());
    match client.currency_formats().await {
        Ok(raw) => Ok(NormalizedFormats::from_raw(
            &raw.money_format,
            &raw.money_with_currency_format,
        )),
        Err(err) => {
            warn!(shop = %shop, error = %err, "Failed to fetch currency formats");
            Err((
                StatusCode::BAD_GATEWAY,
                "Could not load currency formats from Shopify.",
            )
                .into_response())
        }
    }
}

pub async fn dashboard_page(
    session: MerchantSession,
    State(state): State<Arc<AppState>>,
) -> Response {
    let formats = match load_formats(&state, &session.shop).await {
        Ok(formats) => formats,
        Err(resp) => return resp,
    };

    let view = DashboardView {
        shop_domain: session.shop.domain(),
        with_currency: formats.with_currency,
        without_currency: formats.without_currency,
        settings_url: links::currency_settings_url(&session.shop),
        editor_url: links::theme_editor_url(&session.shop, &state.config.theme_extension_id),
    };

    Html(render_dashboard(view)).into_response()
}

/// JSON variant of the dashboard's format pair, for programmatic consumers.
pub async fn api_formats(
    session: MerchantSession,
    State(state): State<Arc<AppState>>,
) -> Response {
    match load_formats(&state, &session.shop).await {
        Ok(formats) => Json(formats).into_response(),
        Err(resp) => resp,
    }
}
