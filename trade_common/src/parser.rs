//! Line parser for dealer messages.
//!
//! Grammar (tokens are separated by any amount of whitespace):
//!
//! ```text
//! message := DEALER VERB args
//! revoke  := DEALER "REVOKE" INT
//! check   := DEALER "CHECK" INT
//! aggress := DEALER "AGGRESS" INT INT
//! post    := DEALER "POST" SIDE COMMODITY INT DECIMAL
//! list    := DEALER "LIST" [COMMODITY [DEALER]]
//! ```
//!
//! The leading dealer is validated for every verb. Parsing stops at the first
//! problem found, in this order: empty line, dealer, verb, token count, then the
//! verb's fields left to right.
use std::str::FromStr;

use crate::command::{Aggress, Check, Command, List, Post, Revoke, Verb};
use crate::commodity::Commodity;
use crate::dealer::Dealer;
use crate::error::ParseError;
use crate::result::Result;
use crate::side::Side;

/// Parses one message line into a `Command`.
///
/// # Examples
///
/// ```
/// use trade_common::command::{Command, Revoke};
/// use trade_common::dealer::Dealer;
/// use trade_common::parser::parse_message;
///
/// let cmd = parse_message("BARX REVOKE 2").unwrap();
/// assert_eq!(cmd, Command::Revoke(Revoke { dealer: Dealer::BARX, order_id: 2 }));
/// ```
pub fn parse_message(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&dealer, rest) = tokens
        .split_first()
        .ok_or_else(|| ParseError::invalid("empty message"))?;
    let dealer: Dealer = dealer.parse()?;

    let (&verb, args) = rest
        .split_first()
        .ok_or_else(|| ParseError::invalid("missing command"))?;
    let verb: Verb = verb
        .parse()
        .map_err(|_| ParseError::invalid(format!("unknown command '{}'", verb)))?;

    match verb {
        Verb::Revoke => {
            let [order_id] = exact::<1>(verb, args)?;
            Ok(Revoke { dealer, order_id: parse_int(order_id)? }.into())
        }
        Verb::Check => {
            let [order_id] = exact::<1>(verb, args)?;
            Ok(Check { dealer, order_id: parse_int(order_id)? }.into())
        }
        Verb::Aggress => {
            let [order_id, quantity] = exact::<2>(verb, args)?;
            Ok(Aggress {
                order_id: parse_int(order_id)?,
                quantity: parse_int(quantity)?,
            }
            .into())
        }
        Verb::Post => parse_post(dealer, args),
        Verb::List => parse_list(args),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_message(s)
    }
}

fn parse_post(dealer: Dealer, args: &[&str]) -> Result<Command> {
    let [side, commodity, order_id, price] = exact::<4>(Verb::Post, args)?;
    let side: Side = side
        .parse()
        .map_err(|_| ParseError::invalid(format!("unknown side '{}'", side)))?;
    let commodity: Commodity = commodity.parse()?;

    Ok(Post {
        dealer,
        side,
        commodity,
        order_id: parse_int(order_id)?,
        price: parse_decimal(price)?,
    }
    .into())
}

fn parse_list(args: &[&str]) -> Result<Command> {
    let list = match *args {
        [] => List::default(),
        [commodity] => List {
            commodity: Some(commodity.parse()?),
            dealer: None,
        },
        [commodity, dealer] => List {
            commodity: Some(commodity.parse()?),
            dealer: Some(dealer.parse()?),
        },
        _ => {
            return Err(ParseError::invalid(format!(
                "LIST takes at most 2 arguments, got {}",
                args.len()
            )));
        }
    };
    Ok(list.into())
}

/// Checks that `verb` got exactly `N` arguments and hands them back as an array.
fn exact<'a, const N: usize>(verb: Verb, args: &[&'a str]) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        ParseError::invalid(format!(
            "{} takes {} argument(s), got {}",
            verb,
            N,
            args.len()
        ))
    })
}

fn parse_int(token: &str) -> Result<u64> {
    token
        .parse()
        .map_err(|_| ParseError::invalid(format!("'{}' is not a non-negative integer", token)))
}

fn parse_decimal(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::invalid(format!("'{}' is not a decimal", token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(line: &str) -> bool {
        matches!(parse_message(line), Err(ParseError::InvalidMessage(_)))
    }

    #[test]
    fn tokens_may_be_separated_by_any_whitespace() {
        assert_eq!(
            parse_message("  BARX\tAGGRESS   1 \t 10  ").unwrap(),
            Command::Aggress(Aggress { order_id: 1, quantity: 10 })
        );
    }

    #[test]
    fn whitespace_only_line_is_invalid() {
        assert!(invalid(""));
        assert!(invalid("   \t "));
    }

    #[test]
    fn dealer_alone_is_invalid() {
        assert!(invalid("BARX"));
    }

    #[test]
    fn dealer_is_checked_before_the_verb() {
        assert_eq!(
            parse_message("MAXBANK STEAL 1"),
            Err(ParseError::UnknownDealer("MAXBANK".into()))
        );
    }

    #[test]
    fn aggress_still_validates_the_dealer() {
        assert_eq!(
            parse_message("NOBODY AGGRESS 1 10"),
            Err(ParseError::UnknownDealer("NOBODY".into()))
        );
    }

    #[test]
    fn verbs_are_case_sensitive() {
        assert!(invalid("BARX revoke 1"));
        assert!(invalid("BARX Check 1"));
    }

    #[test]
    fn arity_is_checked_before_fields() {
        // wrong count wins over the unknown commodity
        assert!(invalid("DB POST SELL ADAMANTIUM 1"));
    }

    #[test]
    fn integers_must_be_whole_tokens() {
        assert!(invalid("BARX REVOKE 2x"));
        assert!(invalid("BARX REVOKE 2.0"));
        assert!(invalid("BARX REVOKE -2"));
        assert!(invalid("BARX AGGRESS 1 ten"));
    }

    #[test]
    fn negative_integers_are_reported_as_out_of_range() {
        assert_eq!(
            parse_message("BARX REVOKE -2"),
            Err(ParseError::InvalidMessage(
                "'-2' is not a non-negative integer".into()
            ))
        );
    }

    #[test]
    fn registry_failures_keep_their_kind() {
        assert_eq!(
            parse_message("MAXBANK LIST"),
            Err(ParseError::UnknownDealer("MAXBANK".into()))
        );
        assert_eq!(
            parse_message("DB POST SELL ADAMANTIUM 1 10.5"),
            Err(ParseError::UnknownCommodity("ADAMANTIUM".into()))
        );
    }

    #[test]
    fn prices_must_be_finite_decimals() {
        assert!(invalid("DB POST BUY OIL 1 10.5abc"));
        assert!(invalid("DB POST BUY OIL 1 inf"));
        assert!(invalid("DB POST BUY OIL 1 NaN"));
        assert!(parse_message("DB POST BUY OIL 1 10").is_ok());
    }

    #[test]
    fn post_rejects_unknown_side() {
        assert!(invalid("DB POST HOLD RICE 1 10.5"));
        assert!(invalid("DB POST sell RICE 1 10.5"));
    }

    #[test]
    fn post_fields_fail_left_to_right() {
        // side is looked at before the commodity
        assert!(invalid("DB POST HOLD ADAMANTIUM 1 10.5"));
        assert_eq!(
            parse_message("DB POST BUY ADAMANTIUM x y"),
            Err(ParseError::UnknownCommodity("ADAMANTIUM".into()))
        );
    }

    #[test]
    fn list_second_dealer_is_validated() {
        assert_eq!(
            parse_message("DB LIST OIL MAXBANK"),
            Err(ParseError::UnknownDealer("MAXBANK".into()))
        );
        assert_eq!(
            parse_message("DB LIST MAXBANK"),
            Err(ParseError::UnknownCommodity("MAXBANK".into()))
        );
        assert!(invalid("DB LIST OIL RBS extra"));
    }

    #[test]
    fn from_str_delegates_to_parse_message() {
        let cmd: Command = "BARX CHECK 2".parse().unwrap();
        assert_eq!(cmd, Command::Check(Check { dealer: Dealer::BARX, order_id: 2 }));
    }
}
