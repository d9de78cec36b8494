use std::collections::HashMap;

use crate::input::InputError;
use crate::input::reader::parse_cell;

/// Column-major table of raw residual cells. Cells are parsed to `f64` only
/// when their column is requested, so unused columns may hold any text.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    cells: Vec<Vec<String>>,
    lines: Vec<u64>,
}

impl ObservationTable {
    /// Repeated header names are renamed `name.1`, `name.2`, ... in order, so
    /// a lookup by the bare name resolves to the first occurrence.
    pub fn new(header: Vec<String>) -> Self {
        let mut columns = Vec::with_capacity(header.len());
        let mut index = HashMap::with_capacity(header.len());
        for name in header {
            let mut resolved = name.clone();
            let mut n = 0usize;
            while index.contains_key(&resolved) {
                n += 1;
                resolved = format!("{}.{}", name, n);
            }
            index.insert(resolved.clone(), columns.len());
            columns.push(resolved);
        }
        let cells = vec![Vec::new(); columns.len()];
        Self {
            columns,
            index,
            cells,
            lines: Vec::new(),
        }
    }

    /// Appends one row read from source line `line`. Short rows are padded
    /// with empty (missing) cells; extra cells are ignored.
    pub fn push_row_at<S: AsRef<str>>(&mut self, line: u64, row: &[S]) {
        for (col, cells) in self.cells.iter_mut().enumerate() {
            let raw = row.get(col).map(|s| s.as_ref()).unwrap_or("");
            cells.push(raw.to_string());
        }
        self.lines.push(line);
    }

    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) {
        // header is line 1
        let line = self.lines.len() as u64 + 2;
        self.push_row_at(line, row);
    }

    pub fn n_rows(&self) -> usize {
        self.lines.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, idx: usize) -> &str {
        self.columns.get(idx).map(String::as_str).unwrap_or("")
    }

    /// Parses the named column. Missing tokens become `NaN`; any other
    /// non-numeric cell is an error naming the column and source line.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, InputError> {
        let idx = *self
            .index
            .get(name)
            .ok_or_else(|| InputError::MissingColumn(name.to_string()))?;
        self.cells[idx]
            .iter()
            .zip(&self.lines)
            .map(|(raw, &line)| parse_cell(raw, line, name))
            .collect()
    }
}
