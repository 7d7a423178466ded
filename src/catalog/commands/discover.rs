use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Lists regular files directly inside `dir` whose name ends with `ext`,
/// sorted by file name.
pub fn run(dir: &Path, ext: &str) -> Result<CmdResult> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.len() > ext.len() && name.ends_with(ext) {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut result = CmdResult::default();
    if files.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "No {} files found in {}.",
            ext,
            dir.display()
        )));
    }
    Ok(result.with_data_files(files))
}
