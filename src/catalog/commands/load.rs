use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::loader;
use crate::store::CourseStore;
use std::path::Path;

pub fn run<S: CourseStore + ?Sized>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let report = loader::load_path(store, path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} loaded successfully!",
        report.source
    )));
    result.add_message(CmdMessage::info(format!(
        "{} courses loaded.",
        report.committed
    )));
    Ok(result.with_load_report(report))
}
