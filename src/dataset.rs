use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::store::RawEntry;

const HSK_WORDS: &str = include_str!("../assets/hsk.json");

/// Parse the word list bundled into the binary.
pub fn load_default() -> Result<Vec<RawEntry>> {
    serde_json::from_str(HSK_WORDS).context("bundled word list is malformed")
}

/// Load a learner-supplied word list from a JSON file.
pub fn load_from_path(path: &Path) -> Result<Vec<RawEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse word list {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::engine::store::EntryStore;

    #[test]
    fn test_bundled_list_loads_and_validates() {
        let rows = load_default().unwrap();
        let store = EntryStore::from_rows(rows).unwrap();
        // Every level band should have words to drill.
        for (i, count) in store.level_counts().iter().enumerate() {
            assert!(*count > 0, "no entries at level {}", i + 1);
        }
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "hanzi": "水", "level": 1, "pinyin": "shuǐ", "meanings": ["water"] }}]"#
        )
        .unwrap();
        let rows = load_from_path(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hanzi, "水");
    }

    #[test]
    fn test_load_from_missing_path_errors() {
        assert!(load_from_path(Path::new("/nonexistent/words.json")).is_err());
    }

    #[test]
    fn test_malformed_json_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_from_path(file.path()).is_err());
    }
}
