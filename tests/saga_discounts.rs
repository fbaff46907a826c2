//! Integration tests for saga discount tiers, from raw text to total.
//!
//! Saga volumes cost 15 each, any other title 20. The saga subtotal is
//! discounted by the number of distinct volumes in the basket:
//!
//! - 1 distinct volume: full price
//! - 2 distinct volumes: 10% off
//! - 3 or more distinct volumes: 20% off

use saga_pricing::{
    basket::Basket,
    parser::parse,
    pricing::{OTHER_UNIT_PRICE, calculate_total},
    titles::Title,
};

fn basket(titles: &[&str]) -> Basket {
    titles.iter().copied().map(Title::new).collect()
}

/// 3 distinct volumes: 3 × 15 = 45, 20% off = 36
#[test]
fn full_trilogy() {
    let basket = basket(&[
        "Back to the Future 1",
        "Back to the Future 2",
        "Back to the Future 3",
    ]);

    assert_eq!(basket.total(), 36.0);
}

/// 2 distinct volumes: 2 × 15 = 30, 10% off = 27
#[test]
fn two_volumes() {
    let basket = basket(&["Back to the Future 1", "Back to the Future 3"]);

    assert_eq!(basket.total(), 27.0);
}

/// 1 volume: 15, no discount
#[test]
fn single_volume() {
    let basket = basket(&["Back to the Future 1"]);

    assert_eq!(basket.total(), 15.0);
}

/// 4 units, 3 distinct: 4 × 15 = 60, 20% off = 48
#[test]
fn trilogy_with_repeated_volume() {
    let basket = basket(&[
        "Back to the Future 1",
        "Back to the Future 2",
        "Back to the Future 3",
        "Back to the Future 2",
    ]);

    assert_eq!(basket.total(), 48.0);
}

/// Trilogy 36 + one other title 20 = 56
#[test]
fn trilogy_with_other_title() {
    let basket = basket(&[
        "Back to the Future 1",
        "Back to the Future 2",
        "Back to the Future 3",
        "La chèvre",
    ]);

    assert_eq!(basket.total(), 56.0);
}

#[test]
fn empty_basket() {
    assert_eq!(Basket::new().total(), 0.0);
    assert_eq!(parse("").total(), 0.0);
    assert_eq!(parse("  \n \r\n").total(), 0.0);
}

#[test]
fn total_is_sum_of_subtotals() {
    let basket = parse(
        "La chèvre\nBack to the Future 1\nLes Visiteurs\nBack to the Future 2\nLa chèvre\n",
    );

    let quote = basket.quote();

    assert_eq!(quote.total, quote.saga_subtotal + quote.other_subtotal);
    assert_eq!(quote.other_subtotal, 3.0 * OTHER_UNIT_PRICE);
    assert_eq!(quote.saga_subtotal, 27.0);
}

#[test]
fn raw_text_with_blank_lines_and_crlf() {
    let raw =
        "\r\n  Back to the Future 1  \r\n\r\nBack to the Future 2\r\n\tBack to the Future 3\r\n";

    assert_eq!(parse(raw).total(), 36.0);
}

#[test]
fn saga_match_is_case_sensitive_substring() {
    let basket = basket(&["prefix Back to the Future suffix", "back to the future 1"]);

    let quote = basket.quote();

    assert_eq!(quote.saga_units, 1);
    assert_eq!(quote.other_units, 1);
    assert_eq!(quote.total, 35.0);
}

#[test]
fn calculate_total_does_not_mutate_input() {
    let titles = vec![
        Title::new("Back to the Future 2"),
        Title::new("La chèvre"),
        Title::new("Back to the Future 1"),
    ];
    let before = titles.clone();

    let total = calculate_total(&titles);

    assert_eq!(titles, before);
    assert_eq!(total, 47.0);
}
