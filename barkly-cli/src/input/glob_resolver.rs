//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
///
/// A plain path that does not exist is reported as missing rather than as
/// a pattern without matches.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_pattern(pattern) && !Path::new(pattern).exists() {
            return Err(CliError::FileNotFound(PathBuf::from(pattern)).into());
        }

        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::InvalidPattern(format!(
            "no files match {}",
            patterns.join(", ")
        ))
        .into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn is_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).to_string_lossy().into_owned()
    }

    #[test]
    fn test_glob_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.md"), "Beta.").unwrap();
        fs::write(dir.path().join("a.md"), "Alpha.").unwrap();
        fs::write(dir.path().join("c.txt"), "Gamma.").unwrap();

        let files =
            resolve_patterns(&[pattern(&dir, "*.md"), pattern(&dir, "a.md")]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("notes.txt"), "Notes.").unwrap();

        let files = resolve_patterns(&[pattern(&dir, "*")]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_plain_path() {
        let error = resolve_patterns(&["/nonexistent/notes.txt".to_string()]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_pattern_without_matches() {
        let dir = TempDir::new().unwrap();
        let error = resolve_patterns(&[pattern(&dir, "*.pdf")]).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_malformed_pattern() {
        let error = resolve_patterns(&["notes/[".to_string()]).unwrap_err();
        assert!(error.to_string().starts_with("Invalid file pattern"));
    }
}
