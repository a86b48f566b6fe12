//! Parsed dealer instructions.
//!
//! A `Command` is a closed set of variants, one per verb of the message
//! grammar. Each variant wraps a plain record (`Revoke`, `Check`, `Aggress`,
//! `Post`, `List`) with public fields and value equality; the records do no
//! validation of their own, that is done once by the parser.
//!
//! `Display` renders the canonical wire form of the command without the
//! leading dealer token, e.g. `POST SELL RICE 1 10.5`.
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::commodity::Commodity;
use crate::dealer::Dealer;
use crate::side::Side;

/// Command keyword, the second token of every message.
#[derive(Debug, Clone, Copy, Display, EnumString, Hash, Eq, PartialEq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verb {
    /// `REVOKE <order id>`
    Revoke,
    /// `CHECK <order id>`
    Check,
    /// `AGGRESS <order id> <quantity>`
    Aggress,
    /// `POST <side> <commodity> <order id> <price>`
    Post,
    /// `LIST [<commodity> [<dealer>]]`
    List,
}

/// Withdraw a previously posted order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Revoke {
    /// Dealer that owns the order.
    pub dealer: Dealer,
    /// Order to withdraw.
    pub order_id: u64,
}

/// Ask for the status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Check {
    /// Dealer that owns the order.
    pub dealer: Dealer,
    /// Order to report on.
    pub order_id: u64,
}

/// Trade against a resting order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Aggress {
    /// Order being hit or lifted.
    pub order_id: u64,
    /// Amount to trade.
    pub quantity: u64,
}

/// Offer to buy or sell a commodity at a price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Dealer posting the order.
    pub dealer: Dealer,
    /// Buy or sell.
    pub side: Side,
    /// What is being traded.
    pub commodity: Commodity,
    /// Identifier of the new order.
    pub order_id: u64,
    /// Limit price.
    pub price: f64,
}

/// Query for resting orders, optionally narrowed by commodity and dealer.
///
/// `None` in a filter means "any": it matches every commodity or dealer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    /// Only orders for this commodity, if set.
    pub commodity: Option<Commodity>,
    /// Only orders from this dealer, if set.
    pub dealer: Option<Dealer>,
}

impl List {
    /// Returns `true` if an order for `commodity` posted by `dealer` passes
    /// both filters.
    pub fn matches(&self, commodity: Commodity, dealer: Dealer) -> bool {
        self.commodity.is_none_or(|c| c == commodity) && self.dealer.is_none_or(|d| d == dealer)
    }
}

/// One parsed dealer instruction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "verb", rename_all = "UPPERCASE")]
pub enum Command {
    /// See [`Revoke`].
    Revoke(Revoke),
    /// See [`Check`].
    Check(Check),
    /// See [`Aggress`].
    Aggress(Aggress),
    /// See [`Post`].
    Post(Post),
    /// See [`List`].
    List(List),
}

impl Command {
    /// Keyword this command is spelled with.
    pub fn verb(&self) -> Verb {
        match self {
            Command::Revoke(_) => Verb::Revoke,
            Command::Check(_) => Verb::Check,
            Command::Aggress(_) => Verb::Aggress,
            Command::Post(_) => Verb::Post,
            Command::List(_) => Verb::List,
        }
    }

    /// Dealer carried by the command. `Aggress` keeps none, and `List` only
    /// has one when it filters by dealer.
    pub fn dealer(&self) -> Option<Dealer> {
        match self {
            Command::Revoke(r) => Some(r.dealer),
            Command::Check(c) => Some(c.dealer),
            Command::Aggress(_) => None,
            Command::Post(p) => Some(p.dealer),
            Command::List(l) => l.dealer,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())?;
        match self {
            Command::Revoke(Revoke { order_id, .. }) | Command::Check(Check { order_id, .. }) => {
                write!(f, " {}", order_id)
            }
            Command::Aggress(a) => write!(f, " {} {}", a.order_id, a.quantity),
            Command::Post(p) => write!(
                f,
                " {} {} {} {}",
                p.side, p.commodity, p.order_id, p.price
            ),
            Command::List(l) => {
                if let Some(commodity) = l.commodity {
                    write!(f, " {}", commodity)?;
                }
                if let Some(dealer) = l.dealer {
                    write!(f, " {}", dealer)?;
                }
                Ok(())
            }
        }
    }
}

impl From<Revoke> for Command {
    fn from(value: Revoke) -> Self {
        Command::Revoke(value)
    }
}

impl From<Check> for Command {
    fn from(value: Check) -> Self {
        Command::Check(value)
    }
}

impl From<Aggress> for Command {
    fn from(value: Aggress) -> Self {
        Command::Aggress(value)
    }
}

impl From<Post> for Command {
    fn from(value: Post) -> Self {
        Command::Post(value)
    }
}

impl From<List> for Command {
    fn from(value: List) -> Self {
        Command::List(value)
    }
}
