//! Column layouts for generated files.
//!
//! Two fixed layouts exist:
//!
//! - **simple**: five columns named after their type
//!   (`string`, `datetime`, `int`, `float`, `longtext`)
//! - **extended**: fifty columns cycling through the same five types, named
//!   `{type}_{i}` with a 1-based index (`string_1`, `datetime_2`, `int_3`, ...)
//!
//! The variant also decides how floats are rendered: extended layouts round
//! them to two decimal places.

use crate::types::ColumnType;
use serde::Serialize;
use std::fmt;

/// Number of columns in the extended layout.
pub const EXTENDED_COLUMN_COUNT: usize = 50;

/// Default target size for the simple variant (2 GiB).
pub const SIMPLE_TARGET_SIZE: u64 = 2 * 1024 * 1024 * 1024;

/// Default target size for the extended variant (20 GiB).
pub const EXTENDED_TARGET_SIZE: u64 = 20 * 1024 * 1024 * 1024;

/// Which fixed layout to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Variant {
    /// 5 columns, unrounded floats
    #[default]
    Simple,
    /// 50 columns, floats rounded to 2 decimal places
    Extended,
}

impl Variant {
    /// Target size used when none is configured.
    pub fn default_target_size(&self) -> u64 {
        match self {
            Variant::Simple => SIMPLE_TARGET_SIZE,
            Variant::Extended => EXTENDED_TARGET_SIZE,
        }
    }

    /// Decimal places floats are rounded to, if any.
    pub fn float_scale(&self) -> Option<u32> {
        match self {
            Variant::Simple => None,
            Variant::Extended => Some(2),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Simple => f.write_str("simple"),
            Variant::Extended => f.write_str("extended"),
        }
    }
}

/// A single named, typed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    /// Column name as written in the header
    pub name: String,

    /// Value kind
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// Ordered column definitions for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    variant: Variant,
    columns: Vec<ColumnDefinition>,
}

impl TableLayout {
    /// Layout for the given variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Simple => Self::simple(),
            Variant::Extended => Self::extended(),
        }
    }

    /// The five column layout.
    pub fn simple() -> Self {
        let columns = ColumnType::CYCLE
            .iter()
            .map(|t| ColumnDefinition::new(t.header_name(), *t))
            .collect();
        Self {
            variant: Variant::Simple,
            columns,
        }
    }

    /// The fifty column layout.
    pub fn extended() -> Self {
        let columns = (1..=EXTENDED_COLUMN_COUNT)
            .map(|i| {
                let column_type = ColumnType::for_position(i);
                ColumnDefinition::new(format!("{}_{i}", column_type.header_name()), column_type)
            })
            .collect();
        Self {
            variant: Variant::Extended,
            columns,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Number of columns (and thus fields per row).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header names in column order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Decimal places floats are rounded to in this layout, if any.
    pub fn float_scale(&self) -> Option<u32> {
        self.variant.float_scale()
    }
}
