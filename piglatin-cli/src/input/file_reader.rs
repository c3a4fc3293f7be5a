//! File reading utilities

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// File reader for UTF-8 text input
pub struct FileReader;

impl FileReader {
    /// Open a file for line-by-line reading
    pub fn open_lines(path: &Path) -> Result<BufReader<File>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::BufRead;
    use tempfile::TempDir;

    #[test]
    fn test_open_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("lines.txt");
        fs::write(&file_path, "one\n\ndon’t\n").unwrap();

        let lines: Vec<String> = FileReader::open_lines(&file_path)
            .unwrap()
            .lines()
            .collect::<std::io::Result<_>>()
            .unwrap();
        assert_eq!(lines, ["one", "", "don’t"]);
    }

    #[test]
    fn test_open_lines_nonexistent_file() {
        let err = FileReader::open_lines(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_non_utf8_content_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");
        fs::write(&file_path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        let result: std::io::Result<Vec<String>> =
            FileReader::open_lines(&file_path).unwrap().lines().collect();
        assert!(result.is_err());
    }
}
