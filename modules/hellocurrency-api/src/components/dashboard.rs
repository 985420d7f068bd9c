use dioxus::prelude::*;

use super::layout::Layout;
use super::render_to_html;

/// Everything the dashboard page needs, resolved before rendering.
#[derive(Clone, PartialEq)]
pub struct DashboardView {
    pub shop_domain: String,
    pub with_currency: String,
    pub without_currency: String,
    pub settings_url: String,
    pub editor_url: String,
}

/// Copies the text content of a format box to the clipboard and flips the
/// button label to "Copied!" for two seconds.
const COPY_SCRIPT: &str = "\
function copyFormat(id, btn) {\
  navigator.clipboard.writeText(document.getElementById(id).textContent);\
  btn.textContent = 'Copied!';\
  setTimeout(function () { btn.textContent = 'Copy'; }, 2000);\
}";

fn format_box(label: &str, element_id: &str, fragment: &str) -> Element {
    rsx! {
        div {
            h3 { class: "text-sm font-semibold mb-2", "{label}" }
            div { class: "flex items-center justify-between bg-gray-100 rounded px-3 py-2.5",
                code { id: "{element_id}", class: "text-sm break-all", "{fragment}" }
                button {
                    r#type: "button",
                    class: "ml-3 text-blue-600 text-sm font-medium cursor-pointer hover:text-blue-800 shrink-0",
                    "onclick": "copyFormat('{element_id}', this)",
                    "Copy"
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Dashboard(view: DashboardView) -> Element {
    rsx! {
        Layout { title: "Dashboard".to_string(), shop_domain: view.shop_domain.clone(),
            script { dangerous_inner_html: "{COPY_SCRIPT}" }
            h2 { class: "text-xl font-semibold mb-6", "Dashboard" }

            // Step 1: money format setup
            div { class: "bg-white border border-gray-200 rounded-lg p-6 mb-6",
                h3 { class: "text-lg font-semibold mb-2", "Step 1: Set up money format" }
                p { class: "text-sm text-gray-600 mb-4",
                    "This option allows you to set the money format of your store, which is essential for the app to function seamlessly."
                }
                ol { class: "list-decimal list-inside text-sm text-gray-600 space-y-1 mb-6",
                    li {
                        "Go to "
                        a { href: "{view.settings_url}", target: "_blank",
                            class: "text-blue-600 hover:text-blue-800",
                            "Shopify Settings → General"
                        }
                    }
                    li { "Under Store Currency, select Change formatting" }
                    li { "Copy & paste the modified money formats below into the HTML with currency and HTML without currency fields" }
                    li { "Click Save at the top right of the screen" }
                }
                div { class: "space-y-4",
                    { format_box("HTML with currency", "format-with-currency", &view.with_currency) }
                    { format_box("HTML without currency", "format-without-currency", &view.without_currency) }
                }
            }

            // Step 2: what the selector does
            div { class: "bg-white border border-gray-200 rounded-lg p-6 mb-6",
                h3 { class: "text-lg font-semibold mb-2", "Step 2: Select currency" }
                p { class: "text-sm text-gray-600",
                    "Once the money format is saved, the currency selector swaps the displayed currency storefront-wide using the wrapped amount above."
                }
            }

            // Step 3: theme editor deep link
            div { class: "bg-white border border-gray-200 rounded-lg p-6",
                h3 { class: "text-lg font-semibold mb-2", "Step 3: Theme editor access" }
                p { class: "text-sm text-gray-600 mb-4",
                    "Click below to add the currency selector to your website."
                }
                a {
                    href: "{view.editor_url}", target: "_blank",
                    class: "inline-block px-4 py-2.5 bg-blue-600 text-white rounded text-sm font-medium hover:bg-blue-800",
                    "Add Currency Selector"
                }
            }
        }
    }
}

pub fn render_dashboard(view: DashboardView) -> String {
    let mut dom = VirtualDom::new_with_props(Dashboard, DashboardProps { view });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
