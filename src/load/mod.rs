pub mod filesystem;

use crate::error::{Result, SfiError};
use crate::report::md::REPORT_TITLE;
use crate::types::evidence::{Evidence, Table};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub const TABLE_EXTENSIONS: [&str; 2] = ["csv", "tsv"];
pub const TEXT_EXTENSIONS: [&str; 3] = ["txt", "text", "md"];

#[derive(Debug, Clone)]
pub struct LoadedEvidence {
    pub path: PathBuf,
    pub sha256: String,
    pub evidence: Evidence,
}

pub fn is_supported(path: &Path) -> bool {
    let ext = filesystem::extension(path);
    TABLE_EXTENSIONS.contains(&ext.as_str()) || TEXT_EXTENSIONS.contains(&ext.as_str())
}

#[derive(Debug, Default)]
pub struct LoadBatch {
    pub loaded: Vec<LoadedEvidence>,
    /// Files that could not be read; only non-zero in directory mode.
    pub skipped: usize,
}

/// Files to assess under `path`: the file itself, or every supported file
/// below a directory in path order. `exclude` (the report being written)
/// is never picked up as a formulation.
pub fn discover(path: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(SfiError::PathNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let excluded = exclude.and_then(|out| out.canonicalize().ok());
    let files: Vec<PathBuf> = filesystem::list_files(path)
        .into_iter()
        .filter(|file| is_supported(file))
        .filter(|file| match &excluded {
            Some(out) => file.canonicalize().ok().as_ref() != Some(out),
            None => true,
        })
        .collect();
    if files.is_empty() {
        return Err(SfiError::NoEvidence(path.display().to_string()));
    }
    Ok(files)
}

/// Loads every discovered file. With `skip_unreadable` a failing file is
/// logged and counted instead of aborting the batch. Reports this tool
/// rendered earlier are left out.
pub fn load_all(files: &[PathBuf], skip_unreadable: bool) -> Result<LoadBatch> {
    let mut batch = LoadBatch::default();
    for file in files {
        match load_evidence(file) {
            Ok(loaded) if skip_unreadable && is_rendered_report(&loaded.evidence) => {
                tracing::info!(path = %file.display(), "skipping previously rendered report");
            }
            Ok(loaded) => batch.loaded.push(loaded),
            Err(e) if skip_unreadable => {
                tracing::warn!(path = %file.display(), error = %e, "skipping formulation");
                batch.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(batch)
}

fn is_rendered_report(evidence: &Evidence) -> bool {
    matches!(evidence, Evidence::Text(text) if text.trim_start().starts_with(REPORT_TITLE))
}

pub fn load_evidence(path: &Path) -> Result<LoadedEvidence> {
    let ext = filesystem::extension(path);
    let delimiter = match ext.as_str() {
        "csv" => Some(b','),
        "tsv" => Some(b'\t'),
        "txt" | "text" | "md" => None,
        _ => {
            return Err(SfiError::UnsupportedFormat {
                path: path.display().to_string(),
                extension: ext,
            })
        }
    };

    let bytes = std::fs::read(path)?;
    let evidence = match delimiter {
        Some(delimiter) => Evidence::Table(parse_table(&bytes, delimiter)?),
        None => Evidence::Text(String::from_utf8_lossy(&bytes).into_owned()),
    };
    tracing::debug!(path = %path.display(), kind = ?evidence.kind(), "evidence loaded");

    Ok(LoadedEvidence {
        path: path.to_path_buf(),
        sha256: sha256_hex(&bytes),
        evidence,
    })
}

pub fn parse_table(bytes: &[u8], delimiter: u8) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    let headers = decode_record(reader.byte_headers()?);
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        rows.push(decode_record(&record?));
    }

    Ok(Table::new(headers, rows))
}

/// Spreadsheet exports are often Latin-1; bad bytes degrade to U+FFFD.
fn decode_record(record: &csv::ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
