use crate::config::RunConfig;
use crate::error::{EngineError, Result};
use line_sift_core::{Buckets, Category};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write one bucket to its output file.
///
/// An empty bucket leaves the file system untouched and yields `Ok(None)`.
///
/// # Errors
/// Returns `EngineError::OutputWrite` if the file cannot be opened or written.
pub fn flush_category(
    config: &RunConfig,
    buckets: &Buckets,
    category: Category,
) -> Result<Option<PathBuf>> {
    if buckets.is_empty(category) {
        return Ok(None);
    }

    let path = config.output_path(category);
    write_lines(&path, &buckets.rendered(category), config.append).map_err(|e| {
        EngineError::OutputWrite {
            path: path.clone(),
            source: e,
        }
    })?;

    log::debug!(
        "wrote {} {} to {}",
        buckets.len(category),
        category.label().to_lowercase(),
        path.display()
    );
    Ok(Some(path))
}

fn write_lines(path: &Path, lines: &[String], append: bool) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write every non-empty bucket, continuing past individual failures.
pub fn flush_to_outputs(config: &RunConfig, buckets: &Buckets) -> (Vec<PathBuf>, Vec<EngineError>) {
    let mut written = Vec::new();
    let mut errors = Vec::new();

    for category in Category::ALL {
        match flush_category(config, buckets, category) {
            Ok(Some(path)) => written.push(path),
            Ok(None) => {}
            Err(e) => {
                log::debug!("recovered: {e}");
                errors.push(e);
            }
        }
    }

    (written, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfigBuilder;
    use std::fs;

    fn config_for(dir: &Path, prefix: &str, append: bool) -> RunConfig {
        RunConfigBuilder::default()
            .output_dir(dir)
            .prefix(prefix)
            .append(append)
            .build()
            .unwrap()
    }

    fn buckets_of(lines: &[&str]) -> Buckets {
        let mut buckets = Buckets::new();
        for line in lines {
            buckets.push_line(line);
        }
        buckets
    }

    #[test]
    fn test_writes_non_empty_buckets_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), "", false);

        let (written, errors) = flush_to_outputs(&config, &buckets_of(&["1", "2", "a"]));

        assert!(errors.is_empty());
        assert_eq!(
            written,
            vec![dir.path().join("integers.txt"), dir.path().join("strings.txt")]
        );
        assert_eq!(fs::read_to_string(dir.path().join("integers.txt")).unwrap(), "1\n2\n");
        assert_eq!(fs::read_to_string(dir.path().join("strings.txt")).unwrap(), "a\n");
        assert!(!dir.path().join("floats.txt").exists());
    }

    #[test]
    fn test_empty_bucket_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let floats = dir.path().join("floats.txt");
        fs::write(&floats, "9.5\n").unwrap();
        let config = config_for(dir.path(), "", false);

        let result = flush_category(&config, &buckets_of(&["1"]), Category::Floats).unwrap();

        assert!(result.is_none());
        assert_eq!(fs::read_to_string(&floats).unwrap(), "9.5\n");
    }

    #[test]
    fn test_truncate_mode_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("integers.txt"), "100\n200\n300\n").unwrap();
        let config = config_for(dir.path(), "", false);

        flush_category(&config, &buckets_of(&["7"]), Category::Integers).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("integers.txt")).unwrap(), "7\n");
    }

    #[test]
    fn test_append_mode_keeps_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("p_floats.txt"), "0.5\n").unwrap();
        let config = config_for(dir.path(), "p_", true);

        flush_category(&config, &buckets_of(&["1.25", "3.0"]), Category::Floats).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("p_floats.txt")).unwrap(),
            "0.5\n1.25\n3.0\n"
        );
    }

    #[test]
    fn test_missing_output_dir_reports_each_bucket() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("nope"), "", false);

        let (written, errors) = flush_to_outputs(&config, &buckets_of(&["1", "1.5", "x"]));

        assert!(written.is_empty());
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| matches!(e, EngineError::OutputWrite { .. })));
    }

    #[test]
    fn test_one_failing_bucket_does_not_stop_others() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where floats.txt should go makes that open fail
        fs::create_dir(dir.path().join("floats.txt")).unwrap();
        let config = config_for(dir.path(), "", false);

        let (written, errors) = flush_to_outputs(&config, &buckets_of(&["1", "1.5", "x"]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path(), Some(dir.path().join("floats.txt").as_path()));
        assert_eq!(written.len(), 2);
    }
}
