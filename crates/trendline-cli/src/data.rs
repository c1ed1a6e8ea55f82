//! CSV column extraction.
//!
//! Reads a plain numeric CSV file with a header row and pulls two named
//! columns into aligned vectors. The format is deliberately simple: values
//! separated by commas, no quoting dialect. Rows are never silently dropped;
//! any cell that fails to parse aborts the load with its row number.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, bail};

/// Loads two named columns from a CSV file with a header row.
///
/// Returns the columns row-aligned, in file order. Blank lines are skipped.
pub(crate) fn load_columns(
    path: &Path,
    x_column: &str,
    y_column: &str,
) -> anyhow::Result<(Vec<f64>, Vec<f64>)> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line.with_context(|| format!("failed to read {}", path.display()))?,
        None => bail!("{}: file is empty", path.display()),
    };
    let names = header.split(',').map(str::trim).collect::<Vec<_>>();
    let x_index = column_index(&names, x_column, path)?;
    let y_index = column_index(&names, y_column, path)?;

    let mut x = vec![];
    let mut y = vec![];
    for (line_index, line) in lines.enumerate() {
        // Header is row 1, so data rows start at 2
        let row = line_index + 2;
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
        x.push(parse_cell(&fields, x_index, x_column, row)?);
        y.push(parse_cell(&fields, y_index, y_column, row)?);
    }

    Ok((x, y))
}

fn column_index(names: &[&str], column: &str, path: &Path) -> anyhow::Result<usize> {
    names.iter().position(|name| *name == column).with_context(|| {
        format!(
            "{}: no column named '{column}' (available: {})",
            path.display(),
            names.join(", ")
        )
    })
}

fn parse_cell(fields: &[&str], index: usize, column: &str, row: usize) -> anyhow::Result<f64> {
    let Some(cell) = fields.get(index) else {
        bail!("row {row}: too few fields for column '{column}'");
    };
    cell.parse::<f64>()
        .with_context(|| format!("row {row}: cannot parse '{cell}' in column '{column}' as a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(contents: &str) -> tempfile_path::TempCsv {
        tempfile_path::TempCsv::new(contents)
    }

    /// Minimal scoped temp file helper for loader tests.
    mod tempfile_path {
        use std::{
            env, fs,
            path::PathBuf,
            sync::atomic::{AtomicU64, Ordering},
        };

        static COUNTER: AtomicU64 = AtomicU64::new(0);

        pub(super) struct TempCsv {
            pub path: PathBuf,
        }

        impl TempCsv {
            pub(super) fn new(contents: &str) -> Self {
                let n = COUNTER.fetch_add(1, Ordering::Relaxed);
                let path = env::temp_dir().join(format!(
                    "trendline-data-test-{}-{n}.csv",
                    std::process::id()
                ));
                fs::write(&path, contents).unwrap();
                Self { path }
            }
        }

        impl Drop for TempCsv {
            fn drop(&mut self) {
                let _ = fs::remove_file(&self.path);
            }
        }
    }

    #[test]
    fn test_extracts_named_columns() {
        let csv = write_csv("id,Spending,Votes\n1,10.0,100.0\n2,20.0,250.0\n");
        let (x, y) = load_columns(&csv.path, "Spending", "Votes").unwrap();
        assert_eq!(x, vec![10.0, 20.0]);
        assert_eq!(y, vec![100.0, 250.0]);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = write_csv("Votes,Spending\n100,10\n250,20\n");
        let (x, y) = load_columns(&csv.path, "Spending", "Votes").unwrap();
        assert_eq!(x, vec![10.0, 20.0]);
        assert_eq!(y, vec![100.0, 250.0]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = write_csv("a,b\n1,2\n\n3,4\n");
        let (x, y) = load_columns(&csv.path, "a", "b").unwrap();
        assert_eq!(x, vec![1.0, 3.0]);
        assert_eq!(y, vec![2.0, 4.0]);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = write_csv("a,b\n1,2\n");
        let err = load_columns(&csv.path, "Spending", "b").unwrap_err();
        assert!(err.to_string().contains("no column named 'Spending'"));
    }

    #[test]
    fn test_bad_cell_reports_row_number() {
        let csv = write_csv("a,b\n1,2\n3,oops\n");
        let err = load_columns(&csv.path, "a", "b").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("row 3"), "unexpected error: {message}");
        assert!(message.contains("oops"));
    }

    #[test]
    fn test_short_row_is_reported() {
        let csv = write_csv("a,b\n1,2\n3\n");
        let err = load_columns(&csv.path, "a", "b").unwrap_err();
        assert!(format!("{err:#}").contains("too few fields"));
    }

    #[test]
    fn test_empty_file_is_reported() {
        let csv = write_csv("");
        let err = load_columns(&csv.path, "a", "b").unwrap_err();
        assert!(err.to_string().contains("file is empty"));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err =
            load_columns(Path::new("/nonexistent/file.csv"), "a", "b").unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
