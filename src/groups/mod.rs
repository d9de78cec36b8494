pub mod defs;
pub mod reshape;

pub use defs::{Field, GroupDef, Trait};

/// Five aligned series for one plotting group.
#[derive(Debug, Clone)]
pub struct GroupSeries {
    pub name: String,
    pub green_area_ratio: Vec<f64>,
    pub cab: Vec<f64>,
    pub car: Vec<f64>,
    pub lai: Vec<f64>,
    pub lma: Vec<f64>,
}

impl GroupSeries {
    pub fn field_series(&self, field: Field) -> &[f64] {
        match field {
            Field::GreenAreaRatio => &self.green_area_ratio,
            Field::Cab => &self.cab,
            Field::Car => &self.car,
            Field::Lai => &self.lai,
            Field::Lma => &self.lma,
        }
    }

    pub fn trait_series(&self, t: Trait) -> &[f64] {
        self.field_series(t.field())
    }

    pub fn len(&self) -> usize {
        self.green_area_ratio.len()
    }
}

#[derive(Debug, Clone)]
pub struct GroupAudit {
    pub group: String,
    pub source_kind: &'static str,
    pub columns: Vec<String>,
    pub n_rows: usize,
}

#[cfg(test)]
#[path = "../../tests/src_inline/groups/tests.rs"]
mod tests;
