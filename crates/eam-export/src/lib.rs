//! # eam-export — Tabular Export Adapter
//!
//! Converts a filtered record set into a flat, order-preserving table.
//! The adapter guarantees faithful field extraction and row order and
//! nothing more; producing the actual spreadsheet file from an
//! [`ExportArtifact`] is the downstream collaborator's job.

pub mod table;

// Re-export primary types.
pub use table::{to_table, CellValue, ColumnSpec, ExportArtifact, ExportRequest, FieldSelector, Table};
