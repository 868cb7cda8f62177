use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;

/// Main menu: one button per module, disabled when the session lacks the
/// matching permission.
#[component]
pub fn MenuPage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();
    let (message, set_message) = create_signal(Option::<String>::None);

    let can_capturas = move || auth_state.get().perms.capturas;
    let can_reportes = move || auth_state.get().perms.reportes;

    view! {
        <div class="menu">
            <h2>"Menú principal"</h2>

            {move || message.get().map(|m| view! { <div class="info-box">{m}</div> })}

            <div class="menu__actions">
                <button
                    class="button button--primary"
                    disabled=move || !can_capturas()
                    on:click=move |_| ctx.open_capture()
                >
                    "Capturas"
                </button>
                <button
                    class="button button--secondary"
                    disabled=move || !can_reportes()
                    on:click=move |_| {
                        set_message.set(Some("Reportes queda pendiente para la siguiente fase.".to_string()))
                    }
                >
                    "Reportes"
                </button>
            </div>
        </div>
    }
}
