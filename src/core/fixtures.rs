//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) fn get_fixture_dir() -> PathBuf {
    env::var("BINGO_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// `<endpoint>_<key>.<ext>`, with every character of `key` that is not ASCII
/// alphanumeric or `-` replaced by `_`.
pub(crate) fn fixture_file_name(endpoint: &str, key: &str, ext: &str) -> String {
    let safe_key: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{endpoint}_{safe_key}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    record_fixture_in(&get_fixture_dir(), endpoint, key, ext, body)
}

pub(crate) fn record_fixture_in(
    dir: &Path,
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(fixture_file_name(endpoint, key, ext));

    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;

    tracing::debug!(path = %path.display(), "BINGO_RECORD: wrote fixture");
    Ok(path)
}
