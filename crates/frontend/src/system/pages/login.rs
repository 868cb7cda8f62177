use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::Select;
use crate::system::auth::{api, context::do_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (usuario_id, set_usuario_id) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (users, set_users) = create_signal(Vec::<UserInfo>::new());
    let (message, set_message) = create_signal(Option::<String>::None);
    let (is_loading, set_is_loading) = create_signal(false);

    let (_, set_auth_state) = use_auth();

    let load_users = move || {
        set_message.set(Some("Cargando usuarios...".to_string()));
        spawn_local(async move {
            match api::fetch_public_users().await {
                Ok(response) => {
                    set_users.set(response.usuarios);
                    set_message.set(None);
                }
                Err(e) => set_message.set(Some(e.to_string())),
            }
        });
    };

    // Populate the user dropdown on first render.
    create_effect(move |_| load_users());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let usuario = usuario_id.get();
        let pass = password.get();

        if usuario.trim().is_empty() {
            set_message.set(Some("Selecciona un usuario".to_string()));
            return;
        }
        if pass.is_empty() {
            set_message.set(Some("Escribe tu password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_message.set(Some("Validando...".to_string()));

        spawn_local(async move {
            match do_login(set_auth_state, usuario, pass).await {
                Ok(()) => {
                    set_password.set(String::new());
                    set_message.set(None);
                }
                Err(e) => set_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    let user_options = Signal::derive(move || {
        users
            .get()
            .iter()
            .map(|u| (u.usuario_id.clone(), u.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let no_users = Signal::derive(move || users.get().is_empty());
    let user_placeholder = Signal::derive(move || {
        if no_users.get() {
            "No hay usuarios activos".to_string()
        } else {
            "Selecciona usuario...".to_string()
        }
    });

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Capturas de Producción"</h1>
                <h2>"Inicio de sesión"</h2>

                <Show when=move || message.get().is_some()>
                    <div class="alert">
                        {move || message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Select
                        label="Usuario".to_string()
                        id="login-usuario".to_string()
                        value=usuario_id
                        placeholder=user_placeholder
                        disabled=no_users
                        options=user_options
                        on_change=Callback::new(move |v: String| set_usuario_id.set(v))
                    />

                    <div class="form__group">
                        <label class="form__label" for="login-password">"Password"</label>
                        <input
                            class="form__input"
                            type="password"
                            id="login-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Validando..." } else { "Entrar" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| load_users()
                        disabled=move || is_loading.get()
                    >
                        "Recargar usuarios"
                    </button>
                </form>
            </div>
        </div>
    }
}
