//! JSON score report

use serde::{Deserialize, Serialize};

use dropblox_core::{Evaluation, Field};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: i64,
    pub dead_cells: usize,
    pub filled_rows: usize,
    pub drops: usize,
    pub field: FieldSize,
    /// Error code when the replay or scoring failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ScoreReport {
    pub fn from_evaluation(evaluation: &Evaluation, field: &Field) -> Self {
        Self {
            score: evaluation.score,
            dead_cells: evaluation.dead_cells,
            filled_rows: evaluation.filled_rows,
            drops: evaluation.drops,
            field: FieldSize {
                width: field.width(),
                height: field.height(),
            },
            error: None,
        }
    }

    /// Report for a replay that stopped early; metrics describe the partial field
    pub fn from_failure(error: &dropblox_core::Error, field: &Field) -> Self {
        Self {
            score: 0,
            dead_cells: field.dead_cells(),
            filled_rows: field.num_filled_rows(),
            drops: field.dropped_ids().len(),
            field: FieldSize {
                width: field.width(),
                height: field.height(),
            },
            error: Some(ReportError {
                code: error.code().to_string(),
                message: error.to_string(),
            }),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
