use contracts::system::auth::Permissions;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a granted permission.
/// Shows a notice if the session lacks it.
#[component]
pub fn RequirePermission(
    permission: fn(&Permissions) -> bool,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                state.token.is_some() && permission(&state.perms)
            }
            fallback=|| view! { <div class="warning-box">"No tienes permiso para esta sección."</div> }
        >
            {children()}
        </Show>
    }
}
