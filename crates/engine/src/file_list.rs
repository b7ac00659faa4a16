//! File-list selection: pick the ambient source files for a step.
//!
//! A file list is plain text, one path per line. Blank lines and lines
//! starting with `#` are skipped; relative paths resolve against the node
//! directory. Selection keeps list order.

use chainbuild_core::SourceFile;
use std::path::Path;

/// Parse a file list, resolving relative entries against `base`.
pub fn parse_file_list(text: &str, base: &Path) -> Vec<SourceFile> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let path = Path::new(line);
            if path.is_absolute() {
                SourceFile::new(path)
            } else {
                SourceFile::new(base.join(path))
            }
        })
        .collect()
}

/// Keep files whose suffix is exactly one of `suffixes`, in list order.
pub fn select_by_suffix(files: Vec<SourceFile>, suffixes: &[String]) -> Vec<SourceFile> {
    files
        .into_iter()
        .filter(|file| {
            file.suffix()
                .is_some_and(|suffix| suffixes.iter().any(|s| s == suffix))
        })
        .collect()
}
