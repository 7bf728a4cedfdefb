//! Metadata generation pipeline.
//!
//! 1. **Ingest**: open the archive and its attribute table entry
//! 2. **Resolve**: pick each row's token id
//! 3. **Output**: write the hidden and the public record for the token
//!
//! Rows are processed strictly in file order and the first error aborts the
//! run. Files written for earlier rows are left in place.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use nft_meta_ingest::{AttributeArchive, DEFAULT_ENTRY_NAME, IngestOptions};
use nft_meta_model::{CollectionInfo, RowShape, TokenIdPolicy};
use nft_meta_output::{build_hidden_record, build_record, public_image_ref, write_record};

pub const DEFAULT_HIDDEN_DIR: &str = "./hidden";
pub const DEFAULT_PUBLIC_DIR: &str = "./public";

/// Inputs of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Collection zip archive.
    pub archive: PathBuf,
    /// Image reference used by every hidden record.
    pub hidden_image: String,
    /// Prefix joined with each row's `file_name` for the public image.
    pub public_prefix: String,
    pub hidden_dir: PathBuf,
    pub public_dir: PathBuf,
    /// Attribute table entry inside the archive.
    pub entry_name: String,
    pub token_id_policy: TokenIdPolicy,
    pub row_shape: RowShape,
    /// Constants of the hidden records.
    pub collection: CollectionInfo,
}

impl GenerateOptions {
    pub fn new(
        archive: impl Into<PathBuf>,
        hidden_image: impl Into<String>,
        public_prefix: impl Into<String>,
    ) -> Self {
        Self {
            archive: archive.into(),
            hidden_image: hidden_image.into(),
            public_prefix: public_prefix.into(),
            hidden_dir: PathBuf::from(DEFAULT_HIDDEN_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            entry_name: DEFAULT_ENTRY_NAME.to_string(),
            token_id_policy: TokenIdPolicy::default(),
            row_shape: RowShape::default(),
            collection: CollectionInfo::default(),
        }
    }

    #[must_use]
    pub fn with_output_dirs(mut self, hidden: impl Into<PathBuf>, public: impl Into<PathBuf>) -> Self {
        self.hidden_dir = hidden.into();
        self.public_dir = public.into();
        self
    }

    #[must_use]
    pub fn with_entry_name(mut self, entry_name: impl Into<String>) -> Self {
        self.entry_name = entry_name.into();
        self
    }

    #[must_use]
    pub fn with_token_id_policy(mut self, policy: TokenIdPolicy) -> Self {
        self.token_id_policy = policy;
        self
    }

    #[must_use]
    pub fn with_row_shape(mut self, row_shape: RowShape) -> Self {
        self.row_shape = row_shape;
        self
    }

    #[must_use]
    pub fn with_collection(mut self, collection: CollectionInfo) -> Self {
        self.collection = collection;
        self
    }
}

/// Files written for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOutput {
    pub token_id: String,
    pub hidden_path: PathBuf,
    pub public_path: PathBuf,
    pub trait_count: usize,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub archive: PathBuf,
    pub hidden_dir: PathBuf,
    pub public_dir: PathBuf,
    pub tokens: Vec<TokenOutput>,
}

impl GenerateSummary {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn trait_count(&self) -> usize {
        self.tokens.iter().map(|token| token.trait_count).sum()
    }
}

/// Generate hidden and public metadata for every row of the attribute table.
///
/// # Errors
///
/// Fails if the archive or its entry cannot be read, a row cannot be decoded
/// or lacks a required field, or an output file cannot be written. Nothing
/// is written when the archive or entry cannot be opened.
pub fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    let span = info_span!("generate", archive = %options.archive.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut archive = AttributeArchive::open(&options.archive)
        .with_context(|| format!("open archive {}", options.archive.display()))?;
    let ingest_options = IngestOptions::default().with_row_shape(options.row_shape);
    let rows = archive
        .rows(&options.entry_name, &ingest_options)
        .with_context(|| format!("open attribute table {}", options.entry_name))?;
    info!(
        columns = rows.headers().len(),
        token_id_policy = %options.token_id_policy,
        "ingest ready"
    );

    let mut tokens = Vec::new();
    for (index, row) in rows.enumerate() {
        let row = row.with_context(|| format!("read row {index}"))?;
        let token_id = options
            .token_id_policy
            .resolve(&row, index)
            .with_context(|| format!("resolve token id for row {index}"))?;
        let token_span = info_span!("token", token_id = %token_id);
        let _token_guard = token_span.enter();

        let hidden = build_hidden_record(&options.collection, &options.hidden_image);
        let hidden_path = write_record(&options.hidden_dir, &token_id, &hidden)
            .with_context(|| format!("write hidden metadata for token {token_id}"))?;

        let image = public_image_ref(&options.public_prefix, &row)
            .with_context(|| format!("build public image for token {token_id}"))?;
        let public = build_record(&image, &row)
            .with_context(|| format!("build public metadata for token {token_id}"))?;
        let public_path = write_record(&options.public_dir, &token_id, &public)
            .with_context(|| format!("write public metadata for token {token_id}"))?;

        debug!(traits = public.attributes.len(), "token written");
        tokens.push(TokenOutput {
            token_id,
            hidden_path,
            public_path,
            trait_count: public.attributes.len(),
        });
    }

    info!(
        tokens = tokens.len(),
        duration_ms = start.elapsed().as_millis(),
        "generation complete"
    );
    Ok(GenerateSummary {
        archive: options.archive.clone(),
        hidden_dir: options.hidden_dir.clone(),
        public_dir: options.public_dir.clone(),
        tokens,
    })
}

/// Load collection constants from a JSON document.
///
/// Fields missing from the document keep their default values.
pub fn load_collection(path: &Path) -> Result<CollectionInfo> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read collection file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse collection file {}", path.display()))
}
