use std::io::ErrorKind;
use std::path::Path;

use encoding_rs::Encoding;
use tracing::{debug, info};

use super::schema::{ResolvedSchema, Schema};
use super::{LoadError, Row, Table};
use crate::config::InputConfig;

/// Cell contents read as null, matching the usual spreadsheet/dataframe
/// conventions for missing values. Compared against the untrimmed cell.
pub const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read, decode and parse the export described by `input`.
///
/// The whole file is read in one call. A byte-order mark takes precedence over
/// the configured encoding label.
pub fn load_table(input: &InputConfig, schema: &Schema) -> Result<Table, LoadError> {
    let path = input.path.as_path();

    let encoding = Encoding::for_label(input.encoding.as_bytes()).ok_or_else(|| {
        LoadError::UnknownEncoding {
            path: path.to_path_buf(),
            label: input.encoding.clone(),
        }
    })?;

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(LoadError::Decode {
            path: path.to_path_buf(),
            encoding: used.name().to_string(),
        });
    }
    debug!(
        "Decoded {} bytes from {:?} as {}",
        bytes.len(),
        path,
        used.name()
    );

    let table = parse_table(&text, input.delimiter, schema, path)?;
    info!(
        "Loaded {} rows from {:?} ({} duplicate header rows skipped)",
        table.rows.len(),
        path,
        table.duplicate_headers
    );
    Ok(table)
}

/// Parse already-decoded text. `path` is only used in error messages.
pub fn parse_table(
    text: &str,
    delimiter: char,
    schema: &Schema,
    path: &Path,
) -> Result<Table, LoadError> {
    let malformed = |reason: String| LoadError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    if !delimiter.is_ascii() {
        return Err(malformed(format!(
            "delimiter {delimiter:?} is not a single-byte character"
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| malformed(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(malformed("missing header row".to_string()));
    }

    let resolved = schema.resolve(headers.iter().map(String::as_str), path)?;

    let mut rows = Vec::new();
    let mut duplicate_headers = 0;

    for record in reader.records() {
        let record = record.map_err(|e| malformed(e.to_string()))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() > headers.len() {
            return Err(malformed(format!(
                "line {line}: expected {} fields, found {}",
                headers.len(),
                record.len()
            )));
        }

        let row = project(&record, &resolved, line);
        if is_repeated_header(&row, &resolved) {
            debug!("Skipping repeated header row at line {}", line);
            duplicate_headers += 1;
            continue;
        }
        rows.push(row);
    }

    Ok(Table {
        headers,
        rows,
        duplicate_headers,
    })
}

fn project(record: &csv::StringRecord, resolved: &ResolvedSchema, line: u64) -> Row {
    let fields = resolved
        .positions
        .iter()
        .map(|(role, index)| {
            let value = record
                .get(*index)
                .filter(|v| !NULL_MARKERS.contains(v))
                .map(str::to_string);
            (*role, value)
        })
        .collect();
    Row::new(line, fields)
}

fn is_repeated_header(row: &Row, resolved: &ResolvedSchema) -> bool {
    row.get(resolved.key)
        .is_some_and(|v| v.trim() == resolved.key_header)
}
