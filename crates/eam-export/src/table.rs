//! # Table Projection
//!
//! Column selectors, cell values, and the record-set-to-table
//! conversion. Extraction never mutates the ledger; it works on the
//! clones a query hands out.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use eam_ledger::LifecycleRecord;

/// A single cell of an exported table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Empty => Ok(()),
        }
    }
}

/// The recognized column extraction options.
///
/// `PayloadField` resolves a field by its wire name against the
/// record's serialized payload, so every payload field that serializes
/// is exportable without the adapter knowing each kind's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "select", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldSelector {
    RecordId,
    Kind,
    State,
    SubjectId,
    CreatedAt,
    UpdatedAt,
    /// Number of accepted transitions.
    HistoryLen,
    PayloadField { name: String },
}

impl FieldSelector {
    /// Extract this selector's cell from a record.
    pub fn extract(&self, record: &LifecycleRecord) -> CellValue {
        match self {
            Self::RecordId => CellValue::Text(record.id.to_string()),
            Self::Kind => CellValue::Text(record.kind.name().to_string()),
            Self::State => CellValue::Text(record.state.name().to_string()),
            Self::SubjectId => CellValue::Text(record.subject.id.clone()),
            Self::CreatedAt => CellValue::Text(record.created_at.to_iso8601()),
            Self::UpdatedAt => CellValue::Text(record.updated_at.to_iso8601()),
            Self::HistoryLen => CellValue::Number(record.history.len() as f64),
            Self::PayloadField { name } => payload_field(record, name),
        }
    }
}

/// One column of the export: label plus extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column header as it should appear in the sheet.
    pub label: String,
    pub selector: FieldSelector,
}

impl ColumnSpec {
    pub fn new(label: impl Into<String>, selector: FieldSelector) -> Self {
        Self {
            label: label.into(),
            selector,
        }
    }
}

/// A flat, order-preserving table: one row per input record, one cell
/// per column, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Caller-supplied naming for the downstream artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// File name of the artifact to produce (e.g. `bao-cao-thanh-ly.xlsx`).
    pub file_name: String,
    /// Sheet label inside the artifact.
    pub sheet_label: String,
}

/// The adapter's complete output: everything the downstream encoder
/// needs to produce the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub sheet_label: String,
    pub table: Table,
}

impl ExportRequest {
    /// Build the export artifact for a record set.
    pub fn build(&self, records: &[LifecycleRecord], columns: &[ColumnSpec]) -> ExportArtifact {
        ExportArtifact {
            file_name: self.file_name.clone(),
            sheet_label: self.sheet_label.clone(),
            table: to_table(records, columns),
        }
    }
}

/// Project a record set into a table, preserving record order and
/// column declaration order.
pub fn to_table(records: &[LifecycleRecord], columns: &[ColumnSpec]) -> Table {
    Table {
        columns: columns.iter().map(|c| c.label.clone()).collect(),
        rows: records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| c.selector.extract(record))
                    .collect()
            })
            .collect(),
    }
}

/// Resolve a payload field by wire name against the serialized payload.
fn payload_field(record: &LifecycleRecord, name: &str) -> CellValue {
    let Ok(Value::Object(map)) = serde_json::to_value(&record.payload) else {
        return CellValue::Empty;
    };
    match map.get(name) {
        Some(Value::String(s)) => CellValue::Text(s.clone()),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(CellValue::Number)
            .unwrap_or(CellValue::Empty),
        Some(Value::Bool(b)) => CellValue::Text(b.to_string()),
        // Lists and nested objects export as their JSON rendering.
        Some(other @ (Value::Array(_) | Value::Object(_))) => CellValue::Text(other.to_string()),
        Some(Value::Null) | None => CellValue::Empty,
    }
}
