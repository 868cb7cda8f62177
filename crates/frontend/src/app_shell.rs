//! Application shell: the auth gate plus the menu/capture view switch.
//!
//! The three views are mutually exclusive: no session shows `LoginPage`;
//! with a session, `AppGlobalContext::active_view` picks menu or capture.

use crate::domain::capture::ui::CapturePage;
use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::layout::top_header::TopHeader;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::menu::MenuPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <TopHeader />
        <main class="app-main">
            {move || match ctx.active_view.get() {
                ActiveView::Menu => view! { <MenuPage /> }.into_any(),
                ActiveView::Capture => view! { <CapturePage /> }.into_any(),
            }}
        </main>
    }
}

/// Auth gate: login page until a session exists.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
