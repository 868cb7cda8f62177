use contracts::domain::capture::{CaptureDraft, FieldVisibility, SuggestStartRequest};
use contracts::domain::catalogs::{CatalogSnapshot, StatusCategory};
use contracts::shared::error::AppError;
use contracts::shared::time::today_local_date;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::capture::model;

/// ViewModel for the capture form.
///
/// Uses simplified MVVM pattern:
/// - Form data stored directly as a [`CaptureDraft`]
/// - Derived rules (visibility, end-time ceiling) computed from signals
/// - Commands for the network operations (load catalogs, suggest, save)
#[derive(Clone, Copy)]
pub struct CaptureFormViewModel {
    pub draft: RwSignal<CaptureDraft>,
    pub catalogs: RwSignal<CatalogSnapshot>,
    pub message: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl CaptureFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(CaptureDraft::for_date(today_local_date())),
            catalogs: RwSignal::new(CatalogSnapshot::default()),
            message: RwSignal::new(None),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    /// Category of the currently selected "estatus a reportar".
    pub fn selected_category(&self) -> StatusCategory {
        let estatus_id = self.draft.with(|d| d.estatus_reportar_id.clone());
        self.catalogs.with(|c| {
            c.find_status(&estatus_id)
                .map(|s| s.category())
                .unwrap_or_default()
        })
    }

    /// Which conditional fields the current status shows.
    pub fn visibility(&self) -> FieldVisibility {
        FieldVisibility::for_category(self.selected_category())
    }

    /// End-time upper bound from the selected shift, when configured.
    pub fn shift_end(&self) -> Option<String> {
        let turno_id = self.draft.with(|d| d.turno_id.clone());
        self.catalogs
            .with(|c| c.find_shift(&turno_id).and_then(|t| t.hora_fin.clone()))
    }

    /// Fetch the catalog snapshot, replacing the previous one wholesale.
    pub fn load_catalogs_command(&self, token: Option<String>) {
        let catalogs = self.catalogs;
        let message = self.message;
        let error = self.error;

        message.set(Some("Cargando catálogos...".to_string()));
        error.set(None);

        spawn_local(async move {
            match model::fetch_catalogs(token.as_deref()).await {
                Ok(snapshot) => {
                    log::info!("catálogos cargados");
                    catalogs.set(snapshot);
                    message.set(Some("Catálogos listos".to_string()));
                }
                Err(e) => {
                    message.set(None);
                    error.set(Some(e.to_string()));
                }
            }
        });
    }

    /// Status selection: mirror "estatus actual" and clear every
    /// conditional field value.
    pub fn on_status_change(&self, estatus_id: String) {
        self.draft.update(|d| d.apply_status_selection(&estatus_id));
    }

    /// Shift selection: re-apply the end-time ceiling, then re-run the
    /// start-time suggestion.
    pub fn on_shift_change(&self, turno_id: String, token: Option<String>) {
        self.draft.update(|d| d.turno_id = turno_id);
        if let Some(bound) = self.shift_end() {
            self.draft.update(|d| d.clamp_end_to_shift(&bound));
        }
        self.maybe_suggest_start(token);
    }

    /// Ask the API for a suggested start time once fecha, turno and máquina
    /// are all chosen; silently a no-op before that. The suggestion
    /// overwrites any manually entered start time. A failure surfaces a
    /// message and leaves the draft untouched.
    pub fn maybe_suggest_start(&self, token: Option<String>) {
        let Some(token) = token else {
            return;
        };
        let (fecha, turno_id, maquina_id) = self
            .draft
            .with(|d| (d.fecha.clone(), d.turno_id.clone(), d.maquina_id.clone()));
        if fecha.trim().is_empty() || turno_id.trim().is_empty() || maquina_id.trim().is_empty() {
            return;
        }

        let draft = self.draft;
        let error = self.error;
        let request = SuggestStartRequest {
            fecha,
            turno_id,
            maquina_id,
        };

        spawn_local(async move {
            match model::suggest_start(&request, &token).await {
                Ok(response) => {
                    log::info!(
                        "hora de inicio sugerida: {} ({})",
                        response.hora_inicio,
                        response.source
                    );
                    draft.update(|d| d.hora_inicio = response.hora_inicio);
                }
                Err(e) => {
                    error.set(Some(format!("No se pudo sugerir hora de inicio: {}", e)));
                }
            }
        });
    }

    /// Validate and submit the draft. A second submit while one is in
    /// flight is rejected, so a double click cannot issue two saves.
    pub fn save_command(&self, token: Option<String>) {
        if self.is_saving.get_untracked() {
            return;
        }
        self.error.set(None);

        let Some(token) = token else {
            self.error.set(Some(AppError::NoSessionError.to_string()));
            return;
        };

        let current = self.draft.get_untracked();
        let bound = self.catalogs.with_untracked(|c| {
            c.find_shift(&current.turno_id)
                .and_then(|t| t.hora_fin.clone())
        });

        if let Err(e) = current.validate(bound.as_deref()) {
            self.error.set(Some(e.to_string()));
            return;
        }
        let payload = match current.to_save_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        self.is_saving.set(true);
        self.message.set(Some("Guardando captura...".to_string()));

        let draft = self.draft;
        let message = self.message;
        let error = self.error;
        let is_saving = self.is_saving;

        spawn_local(async move {
            match model::save_capture(&payload, &token).await {
                Ok(_) => {
                    log::info!("captura guardada");
                    draft.set(CaptureDraft::for_date(today_local_date()));
                    message.set(Some("Captura guardada".to_string()));
                }
                Err(e) => {
                    message.set(None);
                    error.set(Some(e.to_string()));
                }
            }
            is_saving.set(false);
        });
    }
}

impl Default for CaptureFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
