use proptest::prelude::*;
use proptest::sample::select;
use trade_common::commodity::Commodity;
use trade_common::dealer::Dealer;
use trade_common::{ParseError, parse_message};

fn dealer_strategy() -> impl Strategy<Value = Dealer> {
    select(Dealer::all().collect::<Vec<_>>())
}

fn commodity_strategy() -> impl Strategy<Value = Commodity> {
    select(Commodity::all().collect::<Vec<_>>())
}

// Lines that are valid for some verb, built from known dealers and commodities.
fn valid_line_strategy() -> impl Strategy<Value = String> {
    (dealer_strategy(), commodity_strategy(), dealer_strategy(), any::<u64>(), any::<u64>(), 0u32..100_000)
        .prop_flat_map(|(dealer, commodity, other, id, qty, cents)| {
            select(vec![
                format!("{dealer} REVOKE {id}"),
                format!("{dealer} CHECK {id}"),
                format!("{dealer} AGGRESS {id} {qty}"),
                format!("{dealer} POST BUY {commodity} {id} {}.{:02}", cents / 100, cents % 100),
                format!("{dealer} POST SELL {commodity} {id} {cents}"),
                format!("{dealer} LIST"),
                format!("{dealer} LIST {commodity}"),
                format!("{dealer} LIST {commodity} {other}"),
            ])
        })
}

proptest! {
    #[test]
    fn known_dealers_always_parse(dealer in dealer_strategy()) {
        prop_assert_eq!(dealer.id().parse::<Dealer>(), Ok(dealer));
    }

    #[test]
    fn unknown_dealers_are_rejected(id in "[A-Z]{1,8}") {
        prop_assume!(Dealer::all().all(|d| d.id() != id));
        prop_assert_eq!(
            parse_message(&format!("{id} CHECK 1")),
            Err(ParseError::UnknownDealer(id.clone()))
        );
    }

    #[test]
    fn unknown_commodities_are_rejected(name in "[A-Z]{1,10}") {
        prop_assume!(Commodity::all().all(|c| c.name() != name));
        prop_assert_eq!(
            parse_message(&format!("DB POST BUY {name} 1 10.5")),
            Err(ParseError::UnknownCommodity(name.clone()))
        );
    }

    #[test]
    fn reparsing_is_deterministic(line in valid_line_strategy()) {
        let first = parse_message(&line);
        prop_assert!(first.is_ok(), "{}", line);
        prop_assert_eq!(first, parse_message(&line));
    }

    #[test]
    fn trailing_garbage_never_parses(line in valid_line_strategy(), junk in "[a-z]{1,4}") {
        let line = format!("{line} {junk}");
        prop_assert!(parse_message(&line).is_err(), "{}", line);
    }
}
