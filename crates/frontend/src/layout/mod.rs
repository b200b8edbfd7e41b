pub mod global_context;
pub mod toast;
pub mod top_header;

use leptos::prelude::*;
use toast::ToastHost;
use top_header::TopHeader;

/// Main application shell: top bar, routed page, toast overlay.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <TopHeader />
            <main class="app-shell__content">{children()}</main>
            <ToastHost />
        </div>
    }
}
