//! # API Facade
//!
//! [`CatalogApi`] is the single entry point the shell (or any other client)
//! uses. It owns the store, dispatches to the command functions and times each
//! call.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to `commands::<op>`
//! - **Measures** wall-clock time per operation: logged at `debug` under the
//!   operation name and returned in [`CmdResult::elapsed`]
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! Business rules live in the commands and are tested there; API tests only
//! check dispatch and timing.

use crate::commands;
use crate::error::Result;
use crate::store::CourseStore;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Generic over `CourseStore` so any backend, boxed or not, can sit behind it.
pub struct CatalogApi<S: CourseStore> {
    store: S,
}

impl<S: CourseStore> CatalogApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load(&mut self, path: &Path) -> Result<CmdResult> {
        timed("load", || commands::load::run(&mut self.store, path))
    }

    pub fn list_courses(&self) -> Result<CmdResult> {
        timed("print", || commands::list::run(&self.store))
    }

    pub fn describe(&self, id: &str) -> Result<CmdResult> {
        timed("print", || commands::describe::run(&self.store, id))
    }

    /// Fails fast on an empty or taken course number. Returns it normalized.
    pub fn check_new_course(&self, id: &str) -> Result<String> {
        commands::add::check_new_id(&self.store, id)
    }

    pub fn add_course<P: AsRef<str>>(
        &mut self,
        id: &str,
        title: &str,
        prerequisites: &[P],
    ) -> Result<CmdResult> {
        timed("add", || {
            commands::add::run(&mut self.store, id, title, prerequisites)
        })
    }

    pub fn plan_removal(&self, id: &str) -> Result<CmdResult> {
        timed("plan removal", || commands::remove::plan(&self.store, id))
    }

    pub fn remove_course(&mut self, id: &str) -> Result<CmdResult> {
        timed("remove", || commands::remove::run(&mut self.store, id))
    }

    pub fn cleanup_prerequisites(&mut self, id: &str) -> Result<CmdResult> {
        timed("cleanup", || commands::remove::cleanup(&mut self.store, id))
    }

    pub fn data_files(&self, dir: &Path, ext: &str) -> Result<CmdResult> {
        commands::discover::run(dir, ext)
    }
}

fn timed<F>(operation: &'static str, f: F) -> Result<CmdResult>
where
    F: FnOnce() -> Result<CmdResult>,
{
    let start = Instant::now();
    let outcome = f();
    let elapsed = start.elapsed();
    debug!(
        operation,
        elapsed_us = elapsed.as_micros() as u64,
        ok = outcome.is_ok(),
        "operation finished"
    );
    outcome.map(|mut result| {
        result.elapsed = Some(elapsed);
        result
    })
}

pub use crate::commands::{CmdMessage, CmdResult, CourseDetail, MessageLevel};
