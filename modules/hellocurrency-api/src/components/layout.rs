use dioxus::prelude::*;

/// Merchant-facing layout: top bar with the app name, the signed-in shop
/// domain, and a logout link.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, shop_domain: String, children: Element) -> Element {
    let full_title = format!("{title} — Hello Currency");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            div { class: "bg-gray-900 text-white",
                div { class: "max-w-3xl mx-auto px-6 py-4 flex items-center justify-between",
                    span { class: "text-lg font-semibold", "Hello Currency" }
                    div { class: "flex items-center gap-4 text-sm",
                        span { class: "text-gray-400", "{shop_domain}" }
                        a { href: "/logout", class: "text-gray-400 hover:text-white", "Log out" }
                    }
                }
            }
            div { class: "max-w-3xl mx-auto px-6 py-8",
                {children}
            }
        }
    }
}
