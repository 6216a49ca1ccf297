use crate::models::{CategoryEntry, Record};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(::csv::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to open question file: {}", e),
            LoadError::Csv(e) => write!(f, "malformed question file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<::csv::Error> for LoadError {
    fn from(e: ::csv::Error) -> Self {
        LoadError::Csv(e)
    }
}

/// One CSV row as it appears in the file. Every column is optional;
/// presence is checked when converting into a `Record`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    #[serde(rename = "ID")]
    id: Option<String>,
    #[serde(rename = "Q1")]
    q1: Option<String>,
    #[serde(rename = "Q2")]
    q2: Option<String>,
    #[serde(rename = "Q3")]
    q3: Option<String>,
    #[serde(rename = "Q4")]
    q4: Option<String>,
    #[serde(rename = "Q5")]
    q5: Option<String>,
    #[serde(rename = "A1")]
    a1: Option<String>,
    #[serde(rename = "A2")]
    a2: Option<String>,
    #[serde(rename = "A3")]
    a3: Option<String>,
    #[serde(rename = "A4")]
    a4: Option<String>,
    #[serde(rename = "A5")]
    a5: Option<String>,
    #[serde(rename = "T1")]
    t1: Option<String>,
    #[serde(rename = "T2")]
    t2: Option<String>,
    #[serde(rename = "T3")]
    t3: Option<String>,
    #[serde(rename = "T4")]
    t4: Option<String>,
    #[serde(rename = "T5")]
    t5: Option<String>,
}

impl RawRecord {
    /// Rows without an id or without a first prompt are placeholders.
    fn into_record(self) -> Option<Record> {
        let id = parse_id(self.id.as_deref()?)?;
        if self.q1.as_deref().is_none_or(|q| q.trim().is_empty()) {
            return None;
        }

        let entry = |prompt: Option<String>, answer: Option<String>, teaching: Option<String>| {
            CategoryEntry {
                prompt: prompt.unwrap_or_default(),
                answer: answer.unwrap_or_default(),
                teaching: teaching.filter(|t| !t.trim().is_empty()),
            }
        };

        Some(Record {
            id,
            entries: [
                entry(self.q1, self.a1, self.t1),
                entry(self.q2, self.a2, self.t2),
                entry(self.q3, self.a3, self.t3),
                entry(self.q4, self.a4, self.t4),
                entry(self.q5, self.a5, self.t5),
            ],
        })
    }
}

/// Reads the leading decimal digits of an id cell, so `" 12 "` and `"12a"`
/// both yield 12. Cells with no leading digit have no id.
pub fn parse_id(cell: &str) -> Option<u32> {
    let trimmed = cell.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..digits_end].parse().ok()
}

pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .flexible(true)
        .trim(::csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let raw: RawRecord = row?;
        if let Some(record) = raw.into_record() {
            records.push(record);
        }
    }

    records.sort_by_key(|r| r.id);
    Ok(records)
}

pub fn load_csv(path: &Path) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path)?;
    parse_records(file)
}
