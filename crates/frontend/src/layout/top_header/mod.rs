//! TopHeader component - application top bar.
//!
//! Shows the application title, the current user (when a session exists)
//! and the logout action.

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        do_logout(set_auth_state);
        ctx.back_to_menu();
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Capturas de Producción"</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || auth_state.get().user.is_some()>
                    <div class="top-header__user">
                        <span class="top-header__user-name">
                            {move || {
                                auth_state
                                    .get()
                                    .user
                                    .map(|u| u.display_name().to_string())
                                    .unwrap_or_default()
                            }}
                        </span>
                        <span class="top-header__user-id">
                            {move || {
                                auth_state
                                    .get()
                                    .user
                                    .map(|u| format!("Usuario: {}", u.usuario_id))
                                    .unwrap_or_default()
                            }}
                        </span>
                    </div>
                </Show>
                <button class="button button--secondary" on:click=logout>
                    "Cerrar sesión"
                </button>
            </div>
        </header>
    }
}
