use std::path::Path;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// What can go wrong while reading one runtime-measurement file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: file contains no samples")]
    Empty { path: String },

    #[error("{path}:{line}: '{token}' is not a number")]
    BadSample {
        path: String,
        line: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Minimum-runtime loader
// ---------------------------------------------------------------------------

/// Read a runtime-measurement file (one floating-point seconds value per
/// line) and return the fastest observed run.
///
/// Blank lines are skipped (trailing-newline artifacts from shell
/// redirection); any other non-numeric token is a fatal error carrying the
/// file, line number, and offending token.
pub fn min_runtime(path: &Path) -> Result<f64, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut min: Option<f64> = None;
    for (idx, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let value: f64 = token.parse().map_err(|_| LoadError::BadSample {
            path: path.display().to_string(),
            line: idx + 1,
            token: token.to_string(),
        })?;
        min = Some(match min {
            Some(current) => current.min(value),
            None => value,
        });
    }

    min.ok_or_else(|| LoadError::Empty {
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_results(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create results file");
        file.write_all(contents.as_bytes()).expect("write results file");
        path
    }

    #[test]
    fn returns_minimum_of_parsed_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_results(dir.path(), "big_bsp_4.txt", "3.25\n2.75\n4.10\n");
        let min = min_runtime(&path).expect("load");
        assert!((min - 2.75).abs() < 1e-12);
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_blank_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_results(dir.path(), "small_sequential.txt", "  1.5 \n\n0.9\n\n");
        let min = min_runtime(&path).expect("load");
        assert!((min - 0.9).abs() < 1e-12);
    }

    #[test]
    fn single_sample_is_its_own_minimum() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_results(dir.path(), "one.txt", "7.5\n");
        assert_eq!(min_runtime(&path).expect("load"), 7.5);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = min_runtime(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_results(dir.path(), "empty.txt", "");
        let err = min_runtime(&path).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }), "got {err:?}");
    }

    #[test]
    fn non_numeric_line_is_rejected_with_position() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_results(dir.path(), "garbled.txt", "1.0\noops\n2.0\n");
        match min_runtime(&path).unwrap_err() {
            LoadError::BadSample { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected BadSample, got {other:?}"),
        }
    }
}
