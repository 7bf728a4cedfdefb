//! CLI argument definitions for the metadata generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use nft_meta_ingest::DEFAULT_ENTRY_NAME;
use nft_meta_model::TokenIdPolicy;
use nft_meta_cli::pipeline::{DEFAULT_HIDDEN_DIR, DEFAULT_PUBLIC_DIR};

#[derive(Parser)]
#[command(
    name = "nft-meta",
    version,
    about = "Generate hidden and public NFT metadata from a collection archive",
    long_about = "Read the attribute table from a collection zip archive and write one\n\
                  hidden (pre-reveal) and one public (post-reveal) JSON metadata file\n\
                  per token."
)]
pub struct Cli {
    /// Collection zip archive containing the attribute table.
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Image reference used by every hidden metadata file.
    #[arg(value_name = "HIDDEN_IMAGE")]
    pub hidden_image: String,

    /// Prefix joined with each row's file_name to build the public image.
    #[arg(value_name = "PUBLIC_PREFIX")]
    pub public_prefix: String,

    /// Output directory for hidden metadata (must exist).
    #[arg(long = "hidden-dir", value_name = "DIR", default_value = DEFAULT_HIDDEN_DIR)]
    pub hidden_dir: PathBuf,

    /// Output directory for public metadata (must exist).
    #[arg(long = "public-dir", value_name = "DIR", default_value = DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Attribute table entry inside the archive.
    #[arg(long = "entry", value_name = "NAME", default_value = DEFAULT_ENTRY_NAME)]
    pub entry: String,

    /// How token ids are chosen.
    #[arg(long = "token-id", value_enum, default_value = "auto")]
    pub token_id: TokenIdArg,

    /// Fail on rows whose field count differs from the header.
    #[arg(long = "strict-rows")]
    pub strict_rows: bool,

    /// JSON file overriding the collection name, description and external_url.
    #[arg(long = "collection", value_name = "PATH")]
    pub collection: Option<PathBuf>,

    /// Print a table of generated files.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI token id policy choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TokenIdArg {
    /// tokenID column when present, else the row index.
    Auto,
    /// Require a tokenID column.
    Column,
    /// Zero-based row index.
    RowIndex,
}

impl From<TokenIdArg> for TokenIdPolicy {
    fn from(arg: TokenIdArg) -> Self {
        match arg {
            TokenIdArg::Auto => TokenIdPolicy::Auto,
            TokenIdArg::Column => TokenIdPolicy::Column,
            TokenIdArg::RowIndex => TokenIdPolicy::RowIndex,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
