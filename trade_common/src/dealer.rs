//! Dealer codes accepted on the wire.
//!
//! A `Dealer` can only exist for a recognized code, so holding one is proof that
//! the token was validated. Lookup is exact and case-sensitive; anything else
//! fails with `ParseError::UnknownDealer`.
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::ParseError;

/// Set of known dealer codes.
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
#[strum(parse_err_ty = ParseError, parse_err_fn = unknown_dealer)]
pub enum Dealer {
    BARX,
    CITI,
    DB,
    JP,
    JPM,
    MS,
    RBS,
    UBS,
}

fn unknown_dealer(id: &str) -> ParseError {
    ParseError::UnknownDealer(id.to_string())
}

impl Dealer {
    /// The wire code of this dealer.
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Iterates every known dealer.
    pub fn all() -> impl Iterator<Item = Dealer> {
        Dealer::iter()
    }
}
