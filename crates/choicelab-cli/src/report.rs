use chrono::{DateTime, Utc};
use choicelab_analysis::{inference::ExperimentInference, record::ExperimentRecord};
use serde::Serialize;

/// Top-level report document covering every analyzed `.dat` file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
}

/// All experiments of one input file, in presentation order.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Input file name without its extension.
    pub source: String,
    pub experiments: Vec<ExperimentReport>,
}

/// One experiment: the raw counts echoed back plus everything inferred.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub record: ExperimentRecord,
    pub inference: ExperimentInference,
}

/// Presentation sort key for experiment ids: leading number first, then the
/// alphabetic suffix. Ids without a leading number sort after numbered ones,
/// ordered among themselves by the full id.
#[must_use]
pub fn experiment_sort_key(id: &str) -> (u64, String) {
    let digits_end = id
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(id.len());
    match id[..digits_end].parse::<u64>() {
        Ok(number) => (number, id[digits_end..].to_string()),
        Err(_) => (u64::MAX, id.to_string()),
    }
}
