use crate::groups::GroupSeries;
use crate::groups::defs::{Field, GroupDef, GroupSource, replicate_suffix};
use crate::input::{InputError, ObservationTable};

pub fn build_group(table: &ObservationTable, def: &GroupDef) -> Result<GroupSeries, InputError> {
    match &def.source {
        GroupSource::Single { suffix } => single_group(table, &def.name, suffix),
        GroupSource::Replicates { prefix, count } => {
            concatenate_replicates(table, &def.name, prefix, *count)
        }
    }
}

pub fn single_group(
    table: &ObservationTable,
    name: &str,
    suffix: &str,
) -> Result<GroupSeries, InputError> {
    let column = |field: Field| -> Result<Vec<f64>, InputError> {
        table.column(&field.column_name(suffix))
    };
    Ok(GroupSeries {
        name: name.to_string(),
        green_area_ratio: column(Field::GreenAreaRatio)?,
        cab: column(Field::Cab)?,
        car: column(Field::Car)?,
        lai: column(Field::Lai)?,
        lma: column(Field::Lma)?,
    })
}

/// Concatenates `{field}_{prefix}_{i}` for i in 1..=count, in replicate order.
/// Row order and missing values are preserved.
pub fn concatenate_replicates(
    table: &ObservationTable,
    name: &str,
    prefix: &str,
    count: usize,
) -> Result<GroupSeries, InputError> {
    if count == 0 {
        return Err(InputError::InvalidInput(format!(
            "replicate family {} has no replicates",
            prefix
        )));
    }
    let column = |field: Field| -> Result<Vec<f64>, InputError> {
        let mut out = Vec::with_capacity(table.n_rows() * count);
        for i in 1..=count {
            let suffix = replicate_suffix(prefix, i);
            out.extend(table.column(&field.column_name(&suffix))?);
        }
        Ok(out)
    };
    Ok(GroupSeries {
        name: name.to_string(),
        green_area_ratio: column(Field::GreenAreaRatio)?,
        cab: column(Field::Cab)?,
        car: column(Field::Car)?,
        lai: column(Field::Lai)?,
        lma: column(Field::Lma)?,
    })
}
