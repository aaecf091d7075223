mod console;
mod git;
mod hash;
mod report;
mod scan;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vendorscope_core::config::{DEFAULT_ENDPOINT, DEFAULT_REPORT_FILE, DigestAlgorithm, ScanConfig};

#[derive(Parser)]
#[command(
    name = "vendorscope",
    version,
    about = "Identify the versions of vendored C/C++ libraries",
    long_about = "Vendorscope inspects every library directory under a root, records git submodule \
                  metadata and content-hash matches from a version-identification service as JSON \
                  artifacts next to each library, and aggregates them into a Markdown report."
)]
pub struct Cli {
    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Also save each library's file hashes as {name}_hashes.json
    #[arg(long)]
    pub debug: bool,

    /// Version-identification endpoint
    #[arg(long, env = "VENDORSCOPE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// File digest sent to the service
    #[arg(long, default_value = "md5", value_parser = ["md5", "xxh3"])]
    pub digest: String,
}

impl ScanArgs {
    pub fn to_config(&self, report_file: Option<PathBuf>) -> anyhow::Result<ScanConfig> {
        let mut config = ScanConfig {
            endpoint: self.endpoint.clone(),
            debug: self.debug,
            digest: self.digest.parse::<DigestAlgorithm>()?,
            ..ScanConfig::default()
        };
        if let Some(file) = report_file {
            config.report_file = file;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Identify every library under a root and write the dependency report
    #[command(
        long_about = "Runs git submodule inspection and content-hash identification for every \
                            immediate subdirectory of ROOT, then aggregates all artifacts under ROOT \
                            into a Markdown report."
    )]
    Scan {
        /// Directory whose subdirectories are the libraries
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Report file name, relative to ROOT
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Search ROOT for third-party directories and scan their children instead
        #[arg(long)]
        auto_detect: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Identify every library under a root without writing a report
    Process {
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        #[arg(long)]
        auto_detect: bool,

        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Build the report from artifacts already on disk
    Report {
        #[arg(value_name = "ROOT")]
        root: PathBuf,

        /// Report file name, relative to ROOT
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },
    /// Fingerprint one library directory and query the identification service
    Hash {
        #[arg(value_name = "LIBRARY_DIR")]
        path: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Inspect the git submodules of one library directory
    Git {
        #[arg(value_name = "LIBRARY_DIR")]
        path: PathBuf,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Report { .. } => "report",
        Commands::Hash { .. } => "hash",
        Commands::Git { .. } => "git",
        _ => "scan",
    };
    let _guard = vendorscope_runtime::init_logging(component, cli.log_level.as_deref());

    match cli.command {
        Commands::Scan {
            root,
            output,
            auto_detect,
            scan,
        } => scan::run(root, auto_detect, scan.to_config(Some(output))?, true),
        Commands::Process {
            root,
            auto_detect,
            scan,
        } => scan::run(root, auto_detect, scan.to_config(None)?, false),
        Commands::Report { root, output } => report::run(root, output),
        Commands::Hash { path, scan } => hash::run(path, scan.to_config(None)?),
        Commands::Git { path } => git::run(path),
    }
}
