use hellocurrency_common::ShopHandle;

/// App block handle inside the theme app extension.
const APP_BLOCK_HANDLE: &str = "helloCurrency";

/// Deep link to the shop's currency-display settings, where the merchant
/// pastes the normalized formats.
pub fn currency_settings_url(shop: &ShopHandle) -> String {
    format!("https://admin.shopify.com/store/{shop}/settings/general#currency-display")
}

/// Deep link into the theme editor with the currency-selector app embed
/// pre-activated on the index template.
pub fn theme_editor_url(shop: &ShopHandle, extension_id: &str) -> String {
    format!(
        "https://{}/admin/themes/current/editor?context=apps&template=index&activateAppId={extension_id}/{APP_BLOCK_HANDLE}",
        shop.domain()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopHandle {
        ShopHandle::parse("teststorecvd").unwrap()
    }

    #[test]
    fn settings_link_targets_currency_section() {
        assert_eq!(
            currency_settings_url(&shop()),
            "https://admin.shopify.com/store/teststorecvd/settings/general#currency-display"
        );
    }

    #[test]
    fn editor_link_activates_app_embed() {
        let url = theme_editor_url(&shop(), "010de1f3-20a8-4c27-8078-9d5535ccae26");
        assert_eq!(
            url,
            "https://teststorecvd.myshopify.com/admin/themes/current/editor?context=apps&template=index&activateAppId=010de1f3-20a8-4c27-8078-9d5535ccae26/helloCurrency"
        );
    }
}
