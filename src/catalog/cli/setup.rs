use crate::config::CatalogConfig;
use crate::store::StoreBackend;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog", bin_name = "catalog", version)]
#[command(about = "Interactive course catalog with prerequisite checking", long_about = None)]
pub struct Cli {
    /// Directory scanned for data files (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Load this file before showing the menu
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Data file extension offered by the load menu (e.g. csv)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Store implementation
    #[arg(long, value_enum)]
    pub backend: Option<StoreBackend>,

    /// Bucket count for the chained store
    #[arg(long, value_name = "N")]
    pub buckets: Option<usize>,

    /// Print how long each operation took
    #[arg(long)]
    pub timings: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line flags win over `catalog.json`.
    pub fn apply_overrides(&self, config: &mut CatalogConfig) {
        if let Some(ext) = &self.ext {
            config.set_file_ext(ext);
        }
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(buckets) = self.buckets {
            config.bucket_count = buckets;
        }
        if self.timings {
            config.show_timings = true;
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "catalog=warn",
            1 => "catalog=info",
            2 => "catalog=debug",
            _ => "catalog=trace",
        }
    }
}
