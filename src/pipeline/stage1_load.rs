use std::path::Path;

use crate::input::{InputError, ObservationTable, load_table};

#[derive(Debug)]
pub struct Stage1Output {
    pub table: ObservationTable,
}

pub fn run_stage1(input_path: &Path) -> Result<Stage1Output, InputError> {
    let table = load_table(input_path)?;
    if table.n_rows() == 0 {
        tracing::warn!(path = %input_path.display(), "residuals table has no data rows");
    }
    Ok(Stage1Output { table })
}
