use dioxus::prelude::VirtualDom;

pub mod dashboard;
pub mod layout;
pub mod login;

pub use dashboard::{render_dashboard, DashboardView};
pub use login::render_login;

/// Render a VirtualDom into a full HTML document.
pub fn render_to_html(dom: &VirtualDom) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(dom)
    )
}
