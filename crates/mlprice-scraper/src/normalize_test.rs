use super::*;

// -----------------------------------------------------------------------
// parse_price_minor
// -----------------------------------------------------------------------

#[test]
fn parse_price_minor_plain_digits() {
    assert_eq!(parse_price_minor("999"), Some(999));
}

#[test]
fn parse_price_minor_strips_thousands_separator() {
    assert_eq!(parse_price_minor("1.234"), Some(1_234));
    assert_eq!(parse_price_minor("12.345.678"), Some(12_345_678));
}

#[test]
fn parse_price_minor_ignores_symbols_and_whitespace() {
    assert_eq!(parse_price_minor(" R$ 2.499 "), Some(2_499));
}

#[test]
fn parse_price_minor_keeps_leading_zero_value() {
    assert_eq!(parse_price_minor("0"), Some(0));
    assert_eq!(parse_price_minor("007"), Some(7));
}

#[test]
fn parse_price_minor_empty_is_none() {
    assert_eq!(parse_price_minor(""), None);
}

#[test]
fn parse_price_minor_no_digits_is_none() {
    assert_eq!(parse_price_minor("Grátis"), None);
    assert_eq!(parse_price_minor("."), None);
}

#[test]
fn parse_price_minor_overflow_is_none() {
    assert_eq!(parse_price_minor("99999999999999999999999"), None);
}

// -----------------------------------------------------------------------
// normalize
// -----------------------------------------------------------------------

#[test]
fn normalize_single_price_is_not_discounted() {
    let raw = RawItem::single("1.234", Some("/a".to_owned()));
    let record = normalize(&raw);
    assert!(!record.is_discounted());
    assert_eq!(record.effective_price(), 1_234);
    assert_eq!(record.original_price(), 0);
    assert_eq!(record.link.as_deref(), Some("/a"));
}

#[test]
fn normalize_discounted_uses_discounted_price_as_effective() {
    let raw = RawItem::discounted("100", "80", Some("/c".to_owned()));
    let record = normalize(&raw);
    assert!(record.is_discounted());
    assert_eq!(record.effective_price(), 80);
    assert_eq!(record.original_price(), 100);
}

#[test]
fn normalize_discounted_with_zero_original() {
    let raw = RawItem::discounted("0", "80", Some("/d".to_owned()));
    let record = normalize(&raw);
    assert!(record.is_discounted());
    assert_eq!(record.effective_price(), 80);
    assert_eq!(record.original_price(), 0);
}

#[test]
fn normalize_unparsable_single_price_becomes_zero() {
    let raw = RawItem::single("sem preço", Some("/e".to_owned()));
    let record = normalize(&raw);
    assert!(!record.is_discounted());
    assert_eq!(record.effective_price(), 0);
}

#[test]
fn normalize_unparsable_discount_fields_become_zero() {
    let raw = RawItem::discounted("", "n/a", None);
    let record = normalize(&raw);
    assert!(record.is_discounted());
    assert_eq!(record.effective_price(), 0);
    assert_eq!(record.original_price(), 0);
}

#[test]
fn normalize_keeps_missing_link() {
    let raw = RawItem::single("10", None);
    assert!(normalize(&raw).link.is_none());
}

#[test]
fn normalize_round_trips_integer_prices() {
    for price in [0_u64, 1, 99, 1_000, 65_535, 4_294_967_296] {
        let raw = RawItem::single(price.to_string(), None);
        assert_eq!(normalize(&raw).effective_price(), price);
    }
}
