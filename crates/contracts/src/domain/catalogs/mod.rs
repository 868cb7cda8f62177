//! Reference lists ("catálogos") backing the capture form selectors.
//!
//! One snapshot is fetched per form entry and replaces the previous one
//! wholesale; nothing here tracks staleness or merges increments.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Common shape shared by every catalog entry: an id and a display label.
pub trait CatalogEntry {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    /// Label for a selector option, falling back to the id when the
    /// catalog carries no name.
    fn label(&self) -> &str {
        if self.name().trim().is_empty() {
            self.id()
        } else {
            self.name()
        }
    }
}

/// The sheet-backed API serializes some ids as numbers; we compare ids as
/// strings everywhere, so normalize them at the boundary.
fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

macro_rules! catalog_record {
    ($(#[$meta:meta])* $name:ident, $id:ident, $nombre:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(deserialize_with = "string_or_number")]
            pub $id: String,
            #[serde(default)]
            pub $nombre: String,
        }

        impl CatalogEntry for $name {
            fn id(&self) -> &str {
                &self.$id
            }
            fn name(&self) -> &str {
                &self.$nombre
            }
        }
    };
}

catalog_record!(SupervisorRecord, supervisor_id, supervisor_nombre);
catalog_record!(MachineRecord, maquina_id, maquina_nombre);
catalog_record!(AreaRecord, area_id, area_nombre);
catalog_record!(ReasonRecord, motivo_id, motivo_nombre);
catalog_record!(OperatorRecord, operador_id, operador_nombre);
catalog_record!(
    /// A reportable event category. Business rules never look at the raw
    /// name; they go through [`StatusRecord::category`].
    StatusRecord,
    estatus_id,
    estatus_nombre
);

impl StatusRecord {
    pub fn category(&self) -> StatusCategory {
        StatusCategory::from_label(&self.estatus_nombre)
    }
}

/// A named time window bounding valid capture intervals. `hora_fin` caps
/// the capture end time when configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub turno_id: String,
    #[serde(default)]
    pub turno_nombre: String,
    #[serde(default)]
    pub hora_inicio: Option<String>,
    #[serde(default)]
    pub hora_fin: Option<String>,
}

impl CatalogEntry for ShiftRecord {
    fn id(&self) -> &str {
        &self.turno_id
    }
    fn name(&self) -> &str {
        &self.turno_nombre
    }
}

/// Closed classification of a status, derived once from its catalog name.
/// Visibility rules dispatch on this enum, never on raw display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusCategory {
    Production,
    ChangeOver,
    Stoppage,
    #[default]
    Other,
}

impl StatusCategory {
    pub fn from_label(label: &str) -> Self {
        let normalized = normalize_label(label);
        if normalized.contains("produccion") {
            StatusCategory::Production
        } else if normalized.contains("cambio") {
            StatusCategory::ChangeOver
        } else if normalized.contains("paro") {
            StatusCategory::Stoppage
        } else {
            StatusCategory::Other
        }
    }
}

/// Lower-case, trim, and strip Spanish diacritics so classification does
/// not depend on how the catalog spells a status name.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// In-memory snapshot of every reference list the capture form consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub supervisores: Vec<SupervisorRecord>,
    #[serde(default)]
    pub turnos: Vec<ShiftRecord>,
    #[serde(default)]
    pub maquinas: Vec<MachineRecord>,
    #[serde(default)]
    pub estatus: Vec<StatusRecord>,
    #[serde(default)]
    pub areas: Vec<AreaRecord>,
    #[serde(default)]
    pub motivos: Vec<ReasonRecord>,
    #[serde(default)]
    pub operadores: Vec<OperatorRecord>,
}

impl CatalogSnapshot {
    /// Linear, string-compared lookup. `None` when the id is absent or the
    /// snapshot was never loaded.
    pub fn find_shift(&self, id: &str) -> Option<&ShiftRecord> {
        self.turnos.iter().find(|t| t.turno_id == id)
    }

    pub fn find_status(&self, id: &str) -> Option<&StatusRecord> {
        self.estatus.iter().find(|s| s.estatus_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_shifts() -> CatalogSnapshot {
        CatalogSnapshot {
            turnos: vec![
                ShiftRecord {
                    turno_id: "T1".to_string(),
                    turno_nombre: "Matutino".to_string(),
                    hora_inicio: Some("06:00".to_string()),
                    hora_fin: Some("14:00".to_string()),
                },
                ShiftRecord {
                    turno_id: "T2".to_string(),
                    turno_nombre: "Vespertino".to_string(),
                    hora_inicio: None,
                    hora_fin: None,
                },
            ],
            ..CatalogSnapshot::default()
        }
    }

    #[test]
    fn find_shift_by_string_id() {
        let catalogs = snapshot_with_shifts();
        assert_eq!(
            catalogs.find_shift("T1").and_then(|t| t.hora_fin.as_deref()),
            Some("14:00")
        );
        assert!(catalogs.find_shift("T9").is_none());
        assert!(CatalogSnapshot::default().find_shift("T1").is_none());
    }

    #[test]
    fn classifies_accented_labels() {
        assert_eq!(
            StatusCategory::from_label("Producción"),
            StatusCategory::Production
        );
        assert_eq!(
            StatusCategory::from_label("  CAMBIO DE MODELO "),
            StatusCategory::ChangeOver
        );
        assert_eq!(
            StatusCategory::from_label("Paro no programado"),
            StatusCategory::Stoppage
        );
        assert_eq!(
            StatusCategory::from_label("Mantenimiento"),
            StatusCategory::Other
        );
        assert_eq!(StatusCategory::from_label(""), StatusCategory::Other);
    }

    #[test]
    fn numeric_ids_decode_as_strings() {
        let record: MachineRecord =
            serde_json::from_str(r#"{"maquina_id": 12, "maquina_nombre": "Prensa 12"}"#).unwrap();
        assert_eq!(record.maquina_id, "12");
    }

    #[test]
    fn label_falls_back_to_id() {
        let record: AreaRecord = serde_json::from_str(r#"{"area_id": "A1"}"#).unwrap();
        assert_eq!(record.label(), "A1");
    }

    #[test]
    fn snapshot_tolerates_missing_lists() {
        let catalogs: CatalogSnapshot = serde_json::from_str(r#"{"turnos": []}"#).unwrap();
        assert!(catalogs.supervisores.is_empty());
        assert!(catalogs.operadores.is_empty());
    }
}
