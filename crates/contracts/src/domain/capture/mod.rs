//! The capture form draft and the rules derived from it: status-driven
//! field visibility, shift-derived time bounds, and submit validation.

use serde::{Deserialize, Serialize};

use crate::domain::catalogs::StatusCategory;
use crate::shared::error::AppError;
use crate::shared::time::parse_time;

/// Current values of the capture form, all kept as raw form strings.
///
/// Mutated by field edits and by the derived computations below; turned
/// into a [`SavePayload`] snapshot on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureDraft {
    pub fecha: String,
    pub supervisor_id: String,
    pub turno_id: String,
    pub maquina_id: String,
    pub operador_id: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub orden: String,
    pub estatus_reportar_id: String,
    pub estatus_actual_id: String,
    pub produccion_ok: String,
    pub scrap: String,
    pub area_id: String,
    pub motivo_id: String,
}

impl CaptureDraft {
    /// Fresh draft for the given capture date; every other field empty.
    pub fn for_date(fecha: impl Into<String>) -> Self {
        Self {
            fecha: fecha.into(),
            ..Self::default()
        }
    }

    /// Select the "estatus a reportar".
    ///
    /// The actual-status field takes no independent input: it always
    /// mirrors the reported one. Every conditional field value is cleared
    /// unconditionally so no stale value survives a status change.
    pub fn apply_status_selection(&mut self, estatus_id: &str) {
        self.estatus_reportar_id = estatus_id.to_string();
        self.estatus_actual_id = estatus_id.to_string();
        self.produccion_ok.clear();
        self.scrap.clear();
        self.area_id.clear();
        self.motivo_id.clear();
    }

    /// Apply the shift's end time as the end-time ceiling: an already
    /// entered end time past the bound is clamped down to it.
    pub fn clamp_end_to_shift(&mut self, shift_end: &str) {
        let (Some(end), Some(bound)) = (parse_time(&self.hora_fin), parse_time(shift_end)) else {
            return;
        };
        if end > bound {
            self.hora_fin = shift_end.trim().to_string();
        }
    }

    fn required_fields(&self) -> [(&'static str, &str); 10] {
        [
            ("Fecha", self.fecha.as_str()),
            ("Supervisor", self.supervisor_id.as_str()),
            ("Turno", self.turno_id.as_str()),
            ("Máquina", self.maquina_id.as_str()),
            ("Operador", self.operador_id.as_str()),
            ("Hora inicio", self.hora_inicio.as_str()),
            ("Hora fin", self.hora_fin.as_str()),
            ("Orden", self.orden.as_str()),
            ("Estatus a reportar", self.estatus_reportar_id.as_str()),
            ("Estatus actual", self.estatus_actual_id.as_str()),
        ]
    }

    /// First required field that is still empty, in submit priority order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        self.required_fields()
            .iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
    }

    /// Full pre-submit validation: required fields first, then the
    /// start/end interval against the selected shift's end time.
    pub fn validate(&self, shift_end: Option<&str>) -> Result<(), AppError> {
        if let Some(field) = self.first_missing_field() {
            return Err(AppError::MissingFieldError(field.to_string()));
        }
        validate_interval(&self.hora_inicio, &self.hora_fin, shift_end)
    }

    /// Snapshot the draft into its wire form, coercing numeric fields.
    pub fn to_save_payload(&self) -> Result<SavePayload, AppError> {
        let orden = self
            .orden
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::InvalidFieldError("Orden".to_string()))?;
        Ok(SavePayload {
            fecha: self.fecha.clone(),
            supervisor_id: self.supervisor_id.clone(),
            turno_id: self.turno_id.clone(),
            maquina_id: self.maquina_id.clone(),
            operador_id: self.operador_id.clone(),
            hora_inicio: self.hora_inicio.clone(),
            hora_fin: self.hora_fin.clone(),
            orden,
            estatus_reportar_id: self.estatus_reportar_id.clone(),
            estatus_actual_id: self.estatus_actual_id.clone(),
            produccion_ok: parse_optional_count(&self.produccion_ok, "Producción OK")?,
            scrap: parse_optional_count(&self.scrap, "Scrap")?,
            area_id: non_empty(&self.area_id),
            motivo_id: non_empty(&self.motivo_id),
        })
    }
}

/// Validate the start/end interval.
///
/// Unparsable times make the check inconclusive, which counts as passing;
/// the required-field check is what rejects empty times at submit.
pub fn validate_interval(
    hora_inicio: &str,
    hora_fin: &str,
    shift_end: Option<&str>,
) -> Result<(), AppError> {
    let (start, end) = match (parse_time(hora_inicio), parse_time(hora_fin)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(()),
    };
    if end <= start {
        return Err(AppError::OrderingError);
    }
    if let Some(raw_bound) = shift_end {
        if let Some(bound) = parse_time(raw_bound) {
            if end > bound {
                return Err(AppError::ShiftBoundsError(raw_bound.trim().to_string()));
            }
        }
    }
    Ok(())
}

/// Which conditional capture fields are shown for a status category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldVisibility {
    pub produccion_ok: bool,
    pub scrap: bool,
    pub area: bool,
    pub motivo: bool,
}

impl FieldVisibility {
    pub fn for_category(category: StatusCategory) -> Self {
        match category {
            StatusCategory::Production => Self {
                produccion_ok: true,
                scrap: true,
                ..Self::default()
            },
            StatusCategory::ChangeOver => Self {
                scrap: true,
                ..Self::default()
            },
            StatusCategory::Stoppage => Self {
                area: true,
                motivo: true,
                ..Self::default()
            },
            StatusCategory::Other => Self::default(),
        }
    }
}

/// Wire form of a capture, with `orden` and the counters coerced to
/// numbers the way the save endpoint expects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavePayload {
    pub fecha: String,
    pub supervisor_id: String,
    pub turno_id: String,
    pub maquina_id: String,
    pub operador_id: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub orden: i64,
    pub estatus_reportar_id: String,
    pub estatus_actual_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produccion_ok: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrap: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo_id: Option<String>,
}

/// Request for a suggested start time; sent once fecha, turno and máquina
/// are all chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestStartRequest {
    pub fecha: String,
    pub turno_id: String,
    pub maquina_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestStartResponse {
    pub hora_inicio: String,
    #[serde(default)]
    pub source: String,
}

fn parse_optional_count(value: &str, label: &str) -> Result<Option<i64>, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| AppError::InvalidFieldError(label.to_string()))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> CaptureDraft {
        CaptureDraft {
            fecha: "2026-08-06".to_string(),
            supervisor_id: "S1".to_string(),
            turno_id: "T1".to_string(),
            maquina_id: "M1".to_string(),
            operador_id: "O1".to_string(),
            hora_inicio: "08:00".to_string(),
            hora_fin: "12:30".to_string(),
            orden: "12".to_string(),
            estatus_reportar_id: "E1".to_string(),
            estatus_actual_id: "E1".to_string(),
            produccion_ok: "150".to_string(),
            scrap: "3".to_string(),
            area_id: String::new(),
            motivo_id: String::new(),
        }
    }

    #[test]
    fn status_change_mirrors_actual_and_clears_conditionals() {
        let mut draft = full_draft();
        draft.area_id = "A1".to_string();
        draft.apply_status_selection("E2");

        assert_eq!(draft.estatus_reportar_id, "E2");
        assert_eq!(draft.estatus_actual_id, "E2");
        assert!(draft.produccion_ok.is_empty());
        assert!(draft.scrap.is_empty());
        assert!(draft.area_id.is_empty());
        assert!(draft.motivo_id.is_empty());
    }

    #[test]
    fn stoppage_shows_area_and_reason_only() {
        let visibility = FieldVisibility::for_category(StatusCategory::Stoppage);
        assert!(visibility.area);
        assert!(visibility.motivo);
        assert!(!visibility.produccion_ok);
        assert!(!visibility.scrap);
    }

    #[test]
    fn production_shows_counters_only() {
        let visibility = FieldVisibility::for_category(StatusCategory::Production);
        assert!(visibility.produccion_ok);
        assert!(visibility.scrap);
        assert!(!visibility.area);
        assert!(!visibility.motivo);
    }

    #[test]
    fn changeover_shows_scrap_only() {
        let visibility = FieldVisibility::for_category(StatusCategory::ChangeOver);
        assert_eq!(
            visibility,
            FieldVisibility {
                scrap: true,
                ..FieldVisibility::default()
            }
        );
    }

    #[test]
    fn unclassified_status_hides_everything() {
        assert_eq!(
            FieldVisibility::for_category(StatusCategory::Other),
            FieldVisibility::default()
        );
    }

    #[test]
    fn interval_requires_end_after_start() {
        assert_eq!(
            validate_interval("08:00", "08:00", None),
            Err(AppError::OrderingError)
        );
        assert_eq!(
            validate_interval("08:00", "07:59", None),
            Err(AppError::OrderingError)
        );
        assert_eq!(validate_interval("08:00", "08:01", None), Ok(()));
    }

    #[test]
    fn interval_respects_shift_end() {
        assert_eq!(
            validate_interval("08:00", "16:30", Some("16:00")),
            Err(AppError::ShiftBoundsError("16:00".to_string()))
        );
        assert_eq!(validate_interval("08:00", "16:00", Some("16:00")), Ok(()));
    }

    #[test]
    fn interval_is_inconclusive_when_a_time_is_unset() {
        assert_eq!(validate_interval("", "16:00", None), Ok(()));
        assert_eq!(validate_interval("08:00", "", Some("16:00")), Ok(()));
        assert_eq!(validate_interval("", "", None), Ok(()));
    }

    #[test]
    fn missing_fields_reported_in_priority_order() {
        let mut draft = full_draft();
        draft.supervisor_id.clear();
        draft.operador_id.clear();
        assert_eq!(draft.first_missing_field(), Some("Supervisor"));
        assert_eq!(
            draft.validate(None),
            Err(AppError::MissingFieldError("Supervisor".to_string()))
        );

        assert_eq!(full_draft().first_missing_field(), None);
        assert_eq!(
            CaptureDraft::default().first_missing_field(),
            Some("Fecha")
        );
    }

    #[test]
    fn validate_rechecks_interval_after_required_fields() {
        let mut draft = full_draft();
        draft.hora_fin = "08:00".to_string();
        assert_eq!(draft.validate(None), Err(AppError::OrderingError));

        let mut draft = full_draft();
        draft.hora_fin = "16:30".to_string();
        assert_eq!(
            draft.validate(Some("16:00")),
            Err(AppError::ShiftBoundsError("16:00".to_string()))
        );
    }

    #[test]
    fn payload_coerces_order_to_number() {
        let payload = full_draft().to_save_payload().unwrap();
        assert_eq!(payload.orden, 12);
        assert_eq!(payload.produccion_ok, Some(150));
        assert_eq!(payload.scrap, Some(3));
        assert_eq!(payload.area_id, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["orden"], serde_json::json!(12));
        assert!(json.get("area_id").is_none());
    }

    #[test]
    fn payload_rejects_non_numeric_order() {
        let mut draft = full_draft();
        draft.orden = "12a".to_string();
        assert_eq!(
            draft.to_save_payload(),
            Err(AppError::InvalidFieldError("Orden".to_string()))
        );
    }

    #[test]
    fn reset_draft_keeps_only_the_date() {
        let draft = CaptureDraft::for_date("2026-08-06");
        assert_eq!(draft.fecha, "2026-08-06");
        assert_eq!(
            draft,
            CaptureDraft {
                fecha: "2026-08-06".to_string(),
                ..CaptureDraft::default()
            }
        );
    }

    #[test]
    fn end_time_clamps_down_to_shift_end() {
        let mut draft = full_draft();
        draft.hora_fin = "16:30".to_string();
        draft.clamp_end_to_shift("16:00");
        assert_eq!(draft.hora_fin, "16:00");

        // Inside the bound: untouched.
        draft.hora_fin = "15:00".to_string();
        draft.clamp_end_to_shift("16:00");
        assert_eq!(draft.hora_fin, "15:00");

        // Unparsable bound: untouched.
        draft.hora_fin = "15:00".to_string();
        draft.clamp_end_to_shift("");
        assert_eq!(draft.hora_fin, "15:00");
    }
}
