use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::models::{Activity, CatRecord, Gender};

const FIELD_COUNT: usize = 7;

/// Reads every line of `path` as a cat record. The first malformed line,
/// blank lines included, aborts the load.
pub fn load_records(path: &Path) -> Result<Vec<CatRecord>, LoadError> {
    let file = File::open(path).map_err(|source| read_error(path, source))?;

    let mut records = Vec::new();
    for (index, text) in BufReader::new(file).lines().enumerate() {
        let line = index as u64 + 1;
        let text = text.map_err(|source| read_error(path, source))?;
        let row = split_line(text.trim(), line)?;
        records.push(parse_record(&row, line)?);
    }

    debug!(count = records.len(), path = %path.display(), "loaded cat records");
    Ok(records)
}

/// Splits one already-trimmed line on commas. Quotes are plain data.
fn split_line(text: &str, line: u64) -> Result<StringRecord, LoadError> {
    if text.is_empty() {
        return Err(LoadError::FieldCount { line, found: 0 });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());
    let mut row = StringRecord::new();
    reader
        .read_record(&mut row)
        .map_err(|source| LoadError::Parse { line, source })?;
    Ok(row)
}

fn parse_record(row: &StringRecord, line: u64) -> Result<CatRecord, LoadError> {
    if row.len() != FIELD_COUNT {
        return Err(LoadError::FieldCount {
            line,
            found: row.len(),
        });
    }

    let gender_field = &row[3];
    if gender_field != "M" && gender_field != "F" {
        warn!(line, value = gender_field, "unrecognized gender, treating as female");
    }

    let activity = row[4]
        .parse::<Activity>()
        .map_err(|value| LoadError::UnknownActivity { line, value })?;

    Ok(CatRecord {
        name: row[0].to_string(),
        age: parse_number(&row[1], "age", line)?,
        weight: parse_number(&row[2], "weight", line)?,
        gender: Gender::from_field(gender_field),
        activity,
        food_quantity: parse_number(&row[5], "food_quantity", line)?,
        food_type: row[6].to_string(),
    })
}

fn parse_number(value: &str, field: &'static str, line: u64) -> Result<f64, LoadError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| LoadError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
        })
}

fn read_error(path: &Path, source: std::io::Error) -> LoadError {
    if source.kind() == std::io::ErrorKind::NotFound {
        return LoadError::NotFound {
            path: path.to_path_buf(),
        };
    }
    LoadError::Read {
        path: path.to_path_buf(),
        source,
    }
}
