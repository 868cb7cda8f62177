use contracts::shared::error::AppError;
use contracts::system::auth::{Permissions, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::capture::model;

use super::{api, storage};

/// In-memory session state. Permissions are never persisted: they live
/// only for the lifetime of the page.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
    pub perms: Permissions,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());

    // Try to restore the session from localStorage on mount. A stored token
    // is not trusted until the API accepts it for a catalog fetch; gated
    // actions stay disabled until that probe succeeds.
    create_effect(move |_| {
        spawn_local(async move {
            let Some(token) = storage::get_token() else {
                return;
            };
            match model::fetch_catalogs(Some(&token)).await {
                Ok(_) => {
                    log::info!("sesión restaurada desde el almacenamiento");
                    set_auth_state.set(AuthState {
                        token: Some(token),
                        user: storage::get_user(),
                        // The API exposes no re-authorization endpoint, so a
                        // restored session only gets the capture permission.
                        perms: Permissions {
                            capturas: true,
                            reportes: false,
                        },
                    });
                }
                Err(e) => {
                    log::warn!("token almacenado rechazado: {}", e);
                    storage::clear_session();
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Perform login and persist the session.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    usuario_id: String,
    password: String,
) -> Result<(), AppError> {
    let response = api::login(usuario_id, password).await?;

    storage::save_session(&response.token, &response.user);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user: Some(response.user),
        perms: response.perms,
    });

    Ok(())
}

/// Clear the stored session and the in-memory state.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
