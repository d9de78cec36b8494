use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::groups::defs::{Field, raw_groups};
use crate::input::ObservationTable;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(tag: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("green_residuals_{}_{}_{}", tag, std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Value for a raw group, field and row; row 0 of `Cab` is missing in every group.
pub fn fixture_value(group_idx: usize, field: Field, row: usize) -> f64 {
    let x = 0.1 * (row as f64 + 1.0) + 0.01 * group_idx as f64;
    match field {
        Field::GreenAreaRatio => x,
        Field::Cab if row == 0 => f64::NAN,
        Field::Cab => 2.0 * x - 0.3,
        Field::Car => -0.5 * x + 0.1 * (row % 2) as f64,
        Field::Lai => 0.25 * x + 1.0,
        Field::Lma => 0.01 * row as f64,
    }
}

/// CSV with every raw group's five columns and `n_rows` data rows.
pub fn fixture_csv(n_rows: usize) -> String {
    let groups = raw_groups();
    let mut header = Vec::new();
    for def in &groups {
        for field in Field::ALL {
            header.push(field.column_name(&def.name));
        }
    }
    let mut out = header.join(",");
    out.push('\n');
    for row in 0..n_rows {
        let mut cells = Vec::with_capacity(header.len());
        for g in 0..groups.len() {
            for field in Field::ALL {
                let v = fixture_value(g, field, row);
                cells.push(if v.is_nan() {
                    String::new()
                } else {
                    format!("{v}")
                });
            }
        }
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

pub fn fixture_table(n_rows: usize) -> ObservationTable {
    crate::input::reader::read_table(fixture_csv(n_rows).as_bytes()).unwrap()
}
