//! Integration tests for the generation pipeline.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use nft_meta_cli::pipeline::{GenerateOptions, generate};
use nft_meta_ingest::{DEFAULT_ENTRY_NAME, IngestError};
use nft_meta_model::{CollectionInfo, MetadataRecord, ModelError, RowShape, TokenIdPolicy};
use nft_meta_output::OutputError;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir(dir.path().join("hidden")).expect("create hidden dir");
        fs::create_dir(dir.path().join("public")).expect("create public dir");
        Self { dir }
    }

    fn archive(&self, entry: &str, table: &str) -> PathBuf {
        let path = self.dir.path().join("collection.zip");
        let file = File::create(&path).expect("create archive");
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file(entry, SimpleFileOptions::default())
            .expect("start entry");
        writer.write_all(table.as_bytes()).expect("write entry");
        writer.finish().expect("finish archive");
        path
    }

    fn options(&self, archive: &Path) -> GenerateOptions {
        GenerateOptions::new(archive, "ipfs://hidden.png", "ipfs://abc")
            .with_output_dirs(self.hidden_dir(), self.public_dir())
    }

    fn hidden_dir(&self) -> PathBuf {
        self.dir.path().join("hidden")
    }

    fn public_dir(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    fn read(&self, dir: &Path, token_id: &str) -> MetadataRecord {
        let contents = fs::read_to_string(dir.join(format!("{token_id}.json"))).expect("read json");
        serde_json::from_str(&contents).expect("parse json")
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

const HOUSE_TABLE: &str = "name;description;external_url;file_name;attributes[color]\n\
House;A nice house;https://x/1;house1.png;Red\n";

#[test]
fn house_scenario_writes_hidden_and_public_records() {
    let fixture = Fixture::new();
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, HOUSE_TABLE);

    let summary = generate(&fixture.options(&archive)).expect("generate");
    assert_eq!(summary.token_count(), 1);
    assert_eq!(summary.tokens[0].token_id, "0");

    let public = fixture.read(&fixture.public_dir(), "0");
    assert_eq!(public.name, "House");
    assert_eq!(public.description, "A nice house");
    assert_eq!(public.external_url, "https://x/1");
    assert_eq!(public.image, "ipfs://abc/house1.png");
    assert_eq!(public.attributes.len(), 1);
    assert_eq!(public.attributes[0].trait_type, "color");
    assert_eq!(public.attributes[0].value, "Red");

    let hidden = fixture.read(&fixture.hidden_dir(), "0");
    let collection = CollectionInfo::default();
    assert_eq!(hidden.name, collection.name);
    assert_eq!(hidden.description, collection.description);
    assert_eq!(hidden.external_url, collection.external_url);
    assert_eq!(hidden.image, "ipfs://hidden.png");
    assert!(hidden.attributes.is_empty());

    let raw_hidden = fs::read_to_string(fixture.hidden_dir().join("0.json")).unwrap();
    assert!(raw_hidden.contains("Unique ones \\u2014 most"));
    assert!(raw_hidden.is_ascii());
}

#[test]
fn one_file_pair_per_row_named_by_token_id() {
    let fixture = Fixture::new();
    let table = "tokenID;name;description;external_url;file_name;attributes[color];attributes[roof]\n\
                 10;House;A;https://x/10;h.png;Red;Flat\n\
                 11;Shed;B;https://x/11;s.png;Blue;Gable\n\
                 12;Barn;C;https://x/12;b.png;Green;Hip\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    let summary = generate(&fixture.options(&archive)).expect("generate");
    assert_eq!(summary.token_count(), 3);
    assert_eq!(summary.trait_count(), 6);

    let expected = vec!["10.json", "11.json", "12.json"];
    assert_eq!(file_names(&fixture.hidden_dir()), expected);
    assert_eq!(file_names(&fixture.public_dir()), expected);

    let shed = fixture.read(&fixture.public_dir(), "11");
    assert_eq!(shed.image, "ipfs://abc/s.png");
    assert_eq!(shed.attributes.len(), 2);
}

#[test]
fn row_index_policy_ignores_token_column() {
    let fixture = Fixture::new();
    let table = "tokenID;name;description;external_url;file_name\n\
                 10;House;A;https://x/10;h.png\n\
                 11;Shed;B;https://x/11;s.png\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    let options = fixture
        .options(&archive)
        .with_token_id_policy(TokenIdPolicy::RowIndex);
    generate(&options).expect("generate");

    assert_eq!(file_names(&fixture.public_dir()), vec!["0.json", "1.json"]);
    assert_eq!(file_names(&fixture.hidden_dir()), vec!["0.json", "1.json"]);
}

#[test]
fn column_policy_requires_token_id() {
    let fixture = Fixture::new();
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, HOUSE_TABLE);

    let options = fixture
        .options(&archive)
        .with_token_id_policy(TokenIdPolicy::Column);
    let err = generate(&options).unwrap_err();
    assert!(format!("{err:#}").contains("tokenID"));
    assert!(file_names(&fixture.public_dir()).is_empty());
}

#[test]
fn token_id_outside_output_dir_is_rejected() {
    let fixture = Fixture::new();
    let table = "tokenID;name;description;external_url;file_name\n\
                 ../escaped;House;A;https://x/1;h.png\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    let err = generate(&fixture.options(&archive)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ModelError>(),
        Some(ModelError::InvalidTokenId { token_id }) if token_id == "../escaped"
    ));
    assert!(!fixture.dir.path().join("escaped.json").exists());
    assert!(file_names(&fixture.hidden_dir()).is_empty());
}

#[test]
fn rerun_produces_identical_bytes() {
    let fixture = Fixture::new();
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, HOUSE_TABLE);
    let options = fixture.options(&archive);

    generate(&options).expect("first run");
    let first_public = fs::read(fixture.public_dir().join("0.json")).unwrap();
    let first_hidden = fs::read(fixture.hidden_dir().join("0.json")).unwrap();

    fs::remove_file(fixture.public_dir().join("0.json")).unwrap();
    fs::remove_file(fixture.hidden_dir().join("0.json")).unwrap();
    generate(&options).expect("second run");

    assert_eq!(fs::read(fixture.public_dir().join("0.json")).unwrap(), first_public);
    assert_eq!(fs::read(fixture.hidden_dir().join("0.json")).unwrap(), first_hidden);
}

#[test]
fn zero_trait_columns_yield_empty_attributes() {
    let fixture = Fixture::new();
    let table = "name;description;external_url;file_name\nHouse;A;https://x/1;h.png\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    generate(&fixture.options(&archive)).expect("generate");
    let raw = fs::read_to_string(fixture.public_dir().join("0.json")).unwrap();
    assert!(raw.contains("\"attributes\": []"));
}

#[test]
fn empty_file_name_keeps_prefix_slash() {
    let fixture = Fixture::new();
    let table = "name;description;external_url;file_name\nHouse;A;https://x/1;\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    generate(&fixture.options(&archive)).expect("generate");
    assert_eq!(fixture.read(&fixture.public_dir(), "0").image, "ipfs://abc/");
}

#[test]
fn missing_entry_aborts_before_writing() {
    let fixture = Fixture::new();
    let archive = fixture.archive("ZIP/other.csv", HOUSE_TABLE);

    let err = generate(&fixture.options(&archive)).unwrap_err();
    let ingest = err.downcast_ref::<IngestError>().expect("ingest error");
    assert!(matches!(ingest, IngestError::EntryNotFound { .. }));
    assert!(file_names(&fixture.hidden_dir()).is_empty());
    assert!(file_names(&fixture.public_dir()).is_empty());
}

#[test]
fn custom_entry_name_is_honoured() {
    let fixture = Fixture::new();
    let archive = fixture.archive("data/table.csv", HOUSE_TABLE);

    let options = fixture.options(&archive).with_entry_name("data/table.csv");
    assert_eq!(generate(&options).expect("generate").token_count(), 1);
}

#[test]
fn failure_keeps_earlier_rows_and_skips_later_ones() {
    let fixture = Fixture::new();
    let table = "tokenID;name;description;external_url;file_name\n\
                 1;House;A;https://x/1;h.png\n\
                 2;Shed;B;https://x/2\n\
                 3;Barn;C;https://x/3;b.png\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    let err = generate(&fixture.options(&archive)).unwrap_err();
    let output = err.downcast_ref::<OutputError>().expect("output error");
    assert!(matches!(output, OutputError::MissingField { field } if field == "file_name"));

    // Row 2's hidden file is written before its public record fails.
    assert_eq!(file_names(&fixture.hidden_dir()), vec!["1.json", "2.json"]);
    assert_eq!(file_names(&fixture.public_dir()), vec!["1.json"]);
}

#[test]
fn strict_rows_reject_ragged_table() {
    let fixture = Fixture::new();
    let table = "tokenID;name;description;external_url;file_name\n\
                 1;House;A;https://x/1;h.png;extra\n";
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, table);

    let tolerant = generate(&fixture.options(&archive)).expect("tolerant run");
    assert_eq!(tolerant.token_count(), 1);

    let strict = fixture.options(&archive).with_row_shape(RowShape::Strict);
    let err = generate(&strict).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::RaggedRow { expected: 5, found: 6, .. })
    ));
}

#[test]
fn missing_output_directory_fails() {
    let fixture = Fixture::new();
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, HOUSE_TABLE);

    let options = fixture
        .options(&archive)
        .with_output_dirs(fixture.dir.path().join("absent"), fixture.public_dir());
    let err = generate(&options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OutputError>(),
        Some(OutputError::Write { .. })
    ));
    assert!(!fixture.dir.path().join("absent").exists());
}

#[test]
fn collection_override_changes_hidden_records_only() {
    let fixture = Fixture::new();
    let archive = fixture.archive(DEFAULT_ENTRY_NAME, HOUSE_TABLE);
    let collection = CollectionInfo {
        name: "Preview".to_string(),
        description: "Coming soon".to_string(),
        external_url: "https://preview".to_string(),
    };

    generate(&fixture.options(&archive).with_collection(collection)).expect("generate");
    assert_eq!(fixture.read(&fixture.hidden_dir(), "0").name, "Preview");
    assert_eq!(fixture.read(&fixture.public_dir(), "0").name, "House");
}
