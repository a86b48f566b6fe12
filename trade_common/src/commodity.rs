//! Tradable commodities.
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ParseError;

/// Closed set of goods a dealer can post, looked up by their upper-case name.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(
    serialize_all = "UPPERCASE",
    parse_err_ty = ParseError,
    parse_err_fn = unknown_commodity
)]
pub enum Commodity {
    Gold,
    Silv,
    Pork,
    Oil,
    Rice,
}

fn unknown_commodity(name: &str) -> ParseError {
    ParseError::UnknownCommodity(name.to_string())
}

impl Commodity {
    /// The wire name of this commodity.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Iterates every known commodity.
    pub fn all() -> impl Iterator<Item = Commodity> {
        Commodity::iter()
    }
}
