//! Order side of a `POST`.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Buy or sell, spelled `BUY` / `SELL` on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Side {
    /// Dealer wants to buy.
    Buy,
    /// Dealer wants to sell.
    Sell,
}
