use std::path::Path;

pub mod reader;
pub mod table;

pub use table::ObservationTable;

use reader::{open_maybe_gz, read_table};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_table(path: &Path) -> Result<ObservationTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "residuals table not found: {}",
            path.display()
        )));
    }
    let reader = open_maybe_gz(path)?;
    let table = read_table(reader)?;

    tracing::info!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_columns(),
        "loaded residuals table"
    );

    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
