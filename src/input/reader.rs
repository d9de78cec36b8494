use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{InputError, ObservationTable};

/// Cells read as missing, matching the default `na_values` of pandas.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_table<R: Read>(reader: R) -> Result<ObservationTable, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect();
    if header.is_empty() || header.iter().all(|h| h.is_empty()) {
        return Err(InputError::Parse("table header is empty".to_string()));
    }

    let mut table = ObservationTable::new(header);
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        // without a position, count from the header on line 1
        let line_no = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);
        if record.len() > table.n_columns() {
            return Err(InputError::Parse(format!(
                "line {} has {} fields, header has {}",
                line_no,
                record.len(),
                table.n_columns()
            )));
        }
        let row: Vec<&str> = record.iter().collect();
        table.push_row_at(line_no, &row);
    }

    Ok(table)
}

pub fn parse_cell(raw: &str, line_no: u64, column: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    if is_missing(raw) {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| {
        InputError::Parse(format!(
            "non-numeric value {:?} in column {} (line {})",
            raw, column, line_no
        ))
    })
}

pub fn is_missing(raw: &str) -> bool {
    MISSING_TOKENS.contains(&raw)
}
