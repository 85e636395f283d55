use anyhow::{Context, Result};
use noi_model::snapshot::{self, DATA_JS, DATA_JSON};
use noi_model::PageResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the two snapshot files written by [`write_snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub json: PathBuf,
    pub js: PathBuf,
}

/// Write both snapshot files to the given directory.
///
/// Creates the directory if it doesn't exist, then overwrites:
/// - `data.json` — pretty-printed array of page results
/// - `data.js` — the same array, compact, bound to `BOOK_DATA` so a static
///   page can include it with a `<script>` tag
pub fn write_snapshot(results: &[PageResult], output_dir: &Path) -> Result<SnapshotPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let json_path = output_dir.join(DATA_JSON);
    let json = snapshot::render_json(results)?;
    fs::write(&json_path, &json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;
    tracing::info!(path = %json_path.display(), pages = results.len(), "Wrote JSON snapshot");

    let js_path = output_dir.join(DATA_JS);
    let js = snapshot::render_js(results)?;
    fs::write(&js_path, &js)
        .with_context(|| format!("Failed to write {}", js_path.display()))?;
    tracing::info!(path = %js_path.display(), bytes = js.len(), "Wrote script snapshot");

    Ok(SnapshotPaths {
        json: json_path,
        js: js_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<PageResult> {
        vec![
            PageResult {
                id: "preface".into(),
                title: "Preface".into(),
                url: "https://vedabase.io/en/library/noi/preface/".into(),
                text: "Preface text".into(),
                translation: String::new(),
            },
            PageResult {
                id: "1".into(),
                title: "Text 1".into(),
                url: "https://vedabase.io/en/library/noi/1/".into(),
                text: String::new(),
                translation: String::new(),
            },
        ]
    }

    #[test]
    fn test_write_snapshot_files_agree() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_snapshot(&results(), dir.path()).unwrap();

        let json = fs::read_to_string(&paths.json).unwrap();
        let from_json: Vec<PageResult> = serde_json::from_str(&json).unwrap();

        let js = fs::read_to_string(&paths.js).unwrap();
        assert!(js.starts_with("const BOOK_DATA = "));
        assert!(js.ends_with(';'));
        let from_js: Vec<PageResult> =
            serde_json::from_str(snapshot::embedded_json(&js).unwrap()).unwrap();

        assert_eq!(from_json, results());
        assert_eq!(from_js, from_json);
    }

    #[test]
    fn test_write_snapshot_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DATA_JSON), "stale contents that are longer").unwrap();

        write_snapshot(&results()[..1], dir.path()).unwrap();

        let json = fs::read_to_string(dir.path().join(DATA_JSON)).unwrap();
        let parsed: Vec<PageResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_write_snapshot_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site").join("assets");

        let paths = write_snapshot(&results(), &nested).unwrap();
        assert!(paths.json.exists());
        assert!(paths.js.exists());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        assert!(write_snapshot(&results(), &blocker).is_err());
    }
}
