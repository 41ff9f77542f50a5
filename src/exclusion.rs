use crate::error::IndexerError;
use crate::normalizer::normalize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Loads the exclusion list, blank lines ignored.
/// Each line goes through the same normalizer as indexed text and is then
/// split on whitespace, since the global table only ever holds single
/// whitespace-split tokens; a multi-word line excludes each of its words.
pub fn load_exclusions(path: &Path) -> Result<HashSet<String>, IndexerError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        IndexerError::Config(format!(
            "cannot read exclusion file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut excluded = HashSet::new();
    for line in contents.lines() {
        let normalized = normalize(line);
        for token in normalized.split_whitespace() {
            excluded.insert(token.to_string());
        }
    }
    Ok(excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_normalized_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Kot").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Łąka!").unwrap();

        let excluded = load_exclusions(file.path()).unwrap();
        assert_eq!(excluded.len(), 2);
        assert!(excluded.contains("kot"));
        assert!(excluded.contains("laka"));
    }

    #[test]
    fn test_multi_word_lines_exclude_each_token() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ala ma Kota").unwrap();

        let excluded = load_exclusions(file.path()).unwrap();
        assert_eq!(excluded.len(), 3);
        assert!(excluded.contains("ala"));
        assert!(excluded.contains("ma"));
        assert!(excluded.contains("kota"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_exclusions(Path::new("/nonexistent/excluded.txt"));
        assert!(matches!(result, Err(IndexerError::Config(_))));
    }
}
