//! # Catalog Binary
//!
//! Intentionally thin: argument parsing, configuration, logging and the menu
//! all live in [`catalog::cli`]. This file only runs it and turns a startup
//! failure into exit code 1.
//!
//! Errors raised by individual menu operations never reach here; the shell
//! prints them and keeps going.

fn main() {
    if let Err(e) = catalog::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
