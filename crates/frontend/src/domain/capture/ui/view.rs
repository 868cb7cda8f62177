use contracts::domain::capture::validate_interval;
use contracts::domain::catalogs::CatalogEntry;
use contracts::system::auth::Permissions;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::Select;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequirePermission;

use super::view_model::CaptureFormViewModel;

fn catalog_options<T: CatalogEntry>(records: &[T]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|r| (r.id().to_string(), r.label().to_string()))
        .collect()
}

fn can_capture(perms: &Permissions) -> bool {
    perms.capturas
}

/// Capture view, reachable from the menu for sessions with the capture
/// permission.
#[component]
pub fn CapturePage() -> impl IntoView {
    view! {
        <RequirePermission permission=can_capture>
            <CaptureForm />
        </RequirePermission>
    }
}

#[component]
fn CaptureForm() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();
    let vm = CaptureFormViewModel::new();

    let token = move || auth_state.get_untracked().token.clone();

    // Fresh catalog snapshot on every form entry.
    create_effect(move |_| {
        vm.load_catalogs_command(auth_state.get_untracked().token.clone());
    });

    let supervisor_options =
        Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.supervisores)));
    let shift_options = Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.turnos)));
    let machine_options =
        Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.maquinas)));
    let operator_options =
        Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.operadores)));
    let status_options = Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.estatus)));
    let area_options = Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.areas)));
    let reason_options = Signal::derive(move || vm.catalogs.with(|c| catalog_options(&c.motivos)));

    let visibility = Signal::derive(move || vm.visibility());
    let shift_end = Signal::derive(move || vm.shift_end());

    // Live interval hint; submit re-validates with the same rules.
    let interval_error = Signal::derive(move || {
        vm.draft.with(|d| {
            validate_interval(&d.hora_inicio, &d.hora_fin, shift_end.get().as_deref())
                .err()
                .map(|e| e.to_string())
        })
    });

    view! {
        <div class="capture">
            <div class="capture__toolbar">
                <button class="button button--secondary" on:click=move |_| ctx.back_to_menu()>
                    "Regresar al menú"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || vm.is_saving.get()
                    on:click=move |_| vm.save_command(token())
                >
                    {move || if vm.is_saving.get() { "Guardando..." } else { "Guardar captura" }}
                </button>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--bad">{e}</div> })}
            {move || vm.message.get().map(|m| view! { <div class="alert alert--ok">{m}</div> })}

            <div class="detail-form">
                <div class="form__group">
                    <label class="form__label" for="cap-fecha">"Fecha"</label>
                    <input
                        class="form__input"
                        type="date"
                        id="cap-fecha"
                        prop:value=move || vm.draft.with(|d| d.fecha.clone())
                        on:input=move |ev| {
                            vm.draft.update(|d| d.fecha = event_target_value(&ev));
                            vm.maybe_suggest_start(token());
                        }
                    />
                </div>

                <Select
                    label="Supervisor".to_string()
                    id="cap-supervisor".to_string()
                    value=Signal::derive(move || vm.draft.with(|d| d.supervisor_id.clone()))
                    placeholder="Selecciona supervisor...".to_string()
                    options=supervisor_options
                    on_change=Callback::new(move |v: String| {
                        vm.draft.update(|d| d.supervisor_id = v)
                    })
                />

                <Select
                    label="Turno".to_string()
                    id="cap-turno".to_string()
                    value=Signal::derive(move || vm.draft.with(|d| d.turno_id.clone()))
                    placeholder="Selecciona turno...".to_string()
                    options=shift_options
                    on_change=Callback::new(move |v: String| vm.on_shift_change(v, token()))
                />

                <Select
                    label="Máquina".to_string()
                    id="cap-maquina".to_string()
                    value=Signal::derive(move || vm.draft.with(|d| d.maquina_id.clone()))
                    placeholder="Selecciona máquina...".to_string()
                    options=machine_options
                    on_change=Callback::new(move |v: String| {
                        vm.draft.update(|d| d.maquina_id = v);
                        vm.maybe_suggest_start(token());
                    })
                />

                <Select
                    label="Operador".to_string()
                    id="cap-operador".to_string()
                    value=Signal::derive(move || vm.draft.with(|d| d.operador_id.clone()))
                    placeholder="Selecciona operador...".to_string()
                    options=operator_options
                    on_change=Callback::new(move |v: String| {
                        vm.draft.update(|d| d.operador_id = v)
                    })
                />

                <div class="form__group">
                    <label class="form__label" for="cap-hora-inicio">"Hora inicio"</label>
                    <input
                        class="form__input"
                        type="time"
                        id="cap-hora-inicio"
                        prop:value=move || vm.draft.with(|d| d.hora_inicio.clone())
                        on:input=move |ev| {
                            vm.draft.update(|d| d.hora_inicio = event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="cap-hora-fin">"Hora fin"</label>
                    <input
                        class="form__input"
                        type="time"
                        id="cap-hora-fin"
                        max=move || shift_end.get().unwrap_or_default()
                        prop:value=move || vm.draft.with(|d| d.hora_fin.clone())
                        on:input=move |ev| {
                            vm.draft.update(|d| d.hora_fin = event_target_value(&ev))
                        }
                    />
                    {move || interval_error.get().map(|e| view! {
                        <small class="help-text text-error">{e}</small>
                    })}
                </div>

                <div class="form__group">
                    <label class="form__label" for="cap-orden">"Orden"</label>
                    <input
                        class="form__input"
                        type="number"
                        id="cap-orden"
                        prop:value=move || vm.draft.with(|d| d.orden.clone())
                        on:input=move |ev| {
                            vm.draft.update(|d| d.orden = event_target_value(&ev))
                        }
                    />
                </div>

                <Select
                    label="Estatus a reportar".to_string()
                    id="cap-estatus-reportar".to_string()
                    value=Signal::derive(move || vm.draft.with(|d| d.estatus_reportar_id.clone()))
                    placeholder="Selecciona estatus...".to_string()
                    options=status_options
                    on_change=Callback::new(move |v: String| vm.on_status_change(v))
                />

                // Mirrors "estatus a reportar"; takes no independent input.
                <Select
                    label="Estatus actual".to_string()
                    id="cap-estatus-actual".to_string()
                    value=Signal::derive(move || vm.draft.with(|d| d.estatus_actual_id.clone()))
                    placeholder="Selecciona estatus...".to_string()
                    options=status_options
                    disabled=true
                />

                <Show when=move || visibility.get().produccion_ok>
                    <div class="form__group">
                        <label class="form__label" for="cap-produccion-ok">"Producción OK"</label>
                        <input
                            class="form__input"
                            type="number"
                            id="cap-produccion-ok"
                            prop:value=move || vm.draft.with(|d| d.produccion_ok.clone())
                            on:input=move |ev| {
                                vm.draft.update(|d| d.produccion_ok = event_target_value(&ev))
                            }
                        />
                    </div>
                </Show>

                <Show when=move || visibility.get().scrap>
                    <div class="form__group">
                        <label class="form__label" for="cap-scrap">"Scrap"</label>
                        <input
                            class="form__input"
                            type="number"
                            id="cap-scrap"
                            prop:value=move || vm.draft.with(|d| d.scrap.clone())
                            on:input=move |ev| {
                                vm.draft.update(|d| d.scrap = event_target_value(&ev))
                            }
                        />
                    </div>
                </Show>

                <Show when=move || visibility.get().area>
                    <Select
                        label="Área".to_string()
                        id="cap-area".to_string()
                        value=Signal::derive(move || vm.draft.with(|d| d.area_id.clone()))
                        placeholder="Selecciona área...".to_string()
                        options=area_options
                        on_change=Callback::new(move |v: String| {
                            vm.draft.update(|d| d.area_id = v)
                        })
                    />
                </Show>

                <Show when=move || visibility.get().motivo>
                    <Select
                        label="Motivo".to_string()
                        id="cap-motivo".to_string()
                        value=Signal::derive(move || vm.draft.with(|d| d.motivo_id.clone()))
                        placeholder="Selecciona motivo...".to_string()
                        options=reason_options
                        on_change=Callback::new(move |v: String| {
                            vm.draft.update(|d| d.motivo_id = v)
                        })
                    />
                </Show>
            </div>
        </div>
    }
}
