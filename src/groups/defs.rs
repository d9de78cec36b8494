/// One of the five per-group columns in the residuals table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    GreenAreaRatio,
    Cab,
    Car,
    Lai,
    Lma,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::GreenAreaRatio,
        Field::Cab,
        Field::Car,
        Field::Lai,
        Field::Lma,
    ];

    pub fn column_prefix(self) -> &'static str {
        match self {
            Field::GreenAreaRatio => "Green_area_ratio",
            Field::Cab => "Cab",
            Field::Car => "Car",
            Field::Lai => "LAI",
            Field::Lma => "LMA",
        }
    }

    pub fn column_name(self, suffix: &str) -> String {
        format!("{}_{}", self.column_prefix(), suffix)
    }
}

/// Plotted traits, in grid row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trait {
    Cab,
    Car,
    Lai,
    Lma,
}

impl Trait {
    pub const ALL: [Trait; 4] = [Trait::Cab, Trait::Car, Trait::Lai, Trait::Lma];

    pub fn name(self) -> &'static str {
        self.field().column_prefix()
    }

    pub fn field(self) -> Field {
        match self {
            Trait::Cab => Field::Cab,
            Trait::Car => Field::Car,
            Trait::Lai => Field::Lai,
            Trait::Lma => Field::Lma,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSource {
    /// Columns `{field}_{suffix}`.
    Single { suffix: String },
    /// Columns `{field}_{prefix}_{i}` for i in 1..=count, concatenated.
    Replicates { prefix: String, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDef {
    pub name: String,
    pub source: GroupSource,
}

impl GroupDef {
    pub fn single(name: &str) -> Self {
        GroupDef {
            name: name.to_string(),
            source: GroupSource::Single {
                suffix: name.to_string(),
            },
        }
    }

    pub fn replicates(prefix: &str, count: usize) -> Self {
        GroupDef {
            name: prefix.to_string(),
            source: GroupSource::Replicates {
                prefix: prefix.to_string(),
                count,
            },
        }
    }

    /// Names of the raw groups this definition consumes.
    pub fn replicate_names(&self) -> Vec<String> {
        match &self.source {
            GroupSource::Single { .. } => Vec::new(),
            GroupSource::Replicates { prefix, count } => (1..=*count)
                .map(|i| replicate_suffix(prefix, i))
                .collect(),
        }
    }

    /// Table columns read for this group, field-major then replicate order.
    pub fn columns(&self) -> Vec<String> {
        let suffixes = match &self.source {
            GroupSource::Single { suffix } => vec![suffix.clone()],
            GroupSource::Replicates { .. } => self.replicate_names(),
        };
        let mut out = Vec::with_capacity(Field::ALL.len() * suffixes.len());
        for field in Field::ALL {
            for suffix in &suffixes {
                out.push(field.column_name(suffix));
            }
        }
        out
    }

    pub fn source_kind(&self) -> &'static str {
        match self.source {
            GroupSource::Single { .. } => "single",
            GroupSource::Replicates { .. } => "replicates",
        }
    }
}

pub const REPLICATE_COUNT: usize = 3;

const SINGLE_GROUPS: &[&str] = &["IGM", "EGM", "EGG"];
const REPLICATE_FAMILIES: &[&str] = &["NutNet_C", "NutNet_NPK"];

pub fn replicate_suffix(prefix: &str, replicate: usize) -> String {
    format!("{}_{}", prefix, replicate)
}

/// The nine groups present in the table, in declaration order.
pub fn raw_groups() -> Vec<GroupDef> {
    let mut out: Vec<GroupDef> = SINGLE_GROUPS.iter().map(|n| GroupDef::single(n)).collect();
    for prefix in REPLICATE_FAMILIES {
        for i in 1..=REPLICATE_COUNT {
            out.push(GroupDef::single(&replicate_suffix(prefix, i)));
        }
    }
    out
}

pub fn replicate_families() -> Vec<GroupDef> {
    REPLICATE_FAMILIES
        .iter()
        .map(|p| GroupDef::replicates(p, REPLICATE_COUNT))
        .collect()
}

/// Grid column order: `IGM, EGM, EGG, NutNet_C, NutNet_NPK`.
pub fn plotting_groups() -> Vec<GroupDef> {
    resolve_plotting_order(raw_groups(), &replicate_families())
}

/// Registers each family under its name (replacing in place when the name is
/// already registered, appending otherwise), then drops the raw replicate
/// groups the families consume. Surviving groups keep registration order.
pub fn resolve_plotting_order(raw: Vec<GroupDef>, families: &[GroupDef]) -> Vec<GroupDef> {
    let mut out = raw;
    for family in families {
        match out.iter_mut().find(|g| g.name == family.name) {
            Some(existing) => *existing = family.clone(),
            None => out.push(family.clone()),
        }
    }

    let consumed: Vec<String> = families.iter().flat_map(|f| f.replicate_names()).collect();
    out.retain(|g| !consumed.contains(&g.name));
    out
}
