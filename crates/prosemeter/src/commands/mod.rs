//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod compare;
pub mod frequency;
pub mod info;
pub mod metrics;
pub mod readability;
pub mod reading_time;

/// Read a file and validate its size against the configured limit.
///
/// Every file-taking command goes through this: the size check runs on
/// metadata before the content is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Whether a file's content should be stripped from markdown to prose.
///
/// Markdown files are stripped by default; `--raw` turns that off.
pub fn wants_markdown_strip(path: &Utf8Path, raw: bool) -> bool {
    !raw && path.extension() == Some("md")
}
