use anyhow::{Context, Result};
use noi_model::snapshot::{self, DATA_JS, DATA_JSON};
use noi_model::{PageResult, TargetList};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("data.js is not wrapped in `const BOOK_DATA = ` ... `;`")]
    MalformedScript,

    #[error("data.json has {json} records but data.js has {js}")]
    CountMismatch { json: usize, js: usize },

    #[error("record {index} ('{id}') differs between data.json and data.js")]
    RecordMismatch { index: usize, id: String },

    #[error("expected {expected} records for the configured targets, found {found}")]
    TargetCountMismatch { expected: usize, found: usize },

    #[error("record {index} has ID '{found}', expected '{expected}'")]
    TargetOrder {
        index: usize,
        expected: String,
        found: String,
    },
}

/// Summary of a snapshot that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub pages: usize,
    /// Records with no text, i.e. pages that failed to fetch.
    pub empty: usize,
}

/// Verify the `data.json` / `data.js` pair in `dir`.
///
/// Both files must hold the same records. If `targets` is given, the records
/// must also match the target ids one-to-one, in order.
pub fn verify(dir: &Path, targets: Option<&TargetList>) -> Result<SnapshotReport> {
    let json_path = dir.join(DATA_JSON);
    let js_path = dir.join(DATA_JS);

    let json = fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    let from_json: Vec<PageResult> =
        serde_json::from_str(&json).with_context(|| format!("Failed to parse {DATA_JSON}"))?;

    let script = fs::read_to_string(&js_path)
        .with_context(|| format!("Failed to read {}", js_path.display()))?;
    let embedded = snapshot::embedded_json(&script).ok_or(ValidationError::MalformedScript)?;
    let from_js: Vec<PageResult> = serde_json::from_str(embedded)
        .with_context(|| format!("Failed to parse the array embedded in {DATA_JS}"))?;

    let mut errors = compare_snapshots(&from_json, &from_js);
    if let Some(targets) = targets {
        errors.extend(check_targets(&from_json, targets));
    }

    if !errors.is_empty() {
        for e in &errors {
            tracing::warn!("{e}");
        }
        anyhow::bail!("{} validation errors in {}", errors.len(), dir.display());
    }

    let report = SnapshotReport {
        pages: from_json.len(),
        empty: from_json.iter().filter(|r| r.is_empty()).count(),
    };
    tracing::info!(pages = report.pages, empty = report.empty, "Snapshot is valid");

    Ok(report)
}

/// Compare the records decoded from `data.json` with those from `data.js`.
pub fn compare_snapshots(json: &[PageResult], js: &[PageResult]) -> Vec<ValidationError> {
    if json.len() != js.len() {
        return vec![ValidationError::CountMismatch {
            json: json.len(),
            js: js.len(),
        }];
    }

    json.iter()
        .zip(js)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(index, (a, _))| ValidationError::RecordMismatch {
            index,
            id: a.id.clone(),
        })
        .collect()
}

/// Check that there is exactly one record per target, in target order.
pub fn check_targets(results: &[PageResult], targets: &TargetList) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if results.len() != targets.len() {
        errors.push(ValidationError::TargetCountMismatch {
            expected: targets.len(),
            found: results.len(),
        });
    }

    for (index, (result, target)) in results.iter().zip(targets).enumerate() {
        if result.id != target.id {
            errors.push(ValidationError::TargetOrder {
                index,
                expected: target.id.clone(),
                found: result.id.clone(),
            });
        }
    }

    errors
}
