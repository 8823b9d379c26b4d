use std::collections::HashSet;

use num_bigint::BigUint;

use passio_core::{Alphabet, LengthRange};
use passio_generate::{SequenceGenerator, count_combinations};

fn generator(charset: &str, min: i64, max: i64) -> SequenceGenerator {
    SequenceGenerator::new(
        Alphabet::resolve(charset).expect("valid charset"),
        LengthRange::new(min, max).expect("valid range"),
    )
}

#[test]
fn orders_by_length_then_alphabet_position() {
    let produced: Vec<String> = generator("ab", 1, 2).collect();
    assert_eq!(produced, vec!["a", "b", "aa", "ab", "ba", "bb"]);
}

#[test]
fn rightmost_position_advances_fastest() {
    let produced: Vec<String> = generator("xyz", 2, 2).collect();
    assert_eq!(
        produced,
        vec!["xx", "xy", "xz", "yx", "yy", "yz", "zx", "zy", "zz"]
    );
}

#[test]
fn follows_given_symbol_order_not_sorted_order() {
    let produced: Vec<String> = generator("ba", 1, 1).collect();
    assert_eq!(produced, vec!["b", "a"]);
}

#[test]
fn single_symbol_single_length_yields_one_string() {
    let produced: Vec<String> = generator("x", 1, 1).collect();
    assert_eq!(produced, vec!["x"]);
}

#[test]
fn single_symbol_yields_one_string_per_tier() {
    let produced: Vec<String> = generator("x", 2, 5).collect();
    assert_eq!(produced, vec!["xx", "xxx", "xxxx", "xxxxx"]);
}

#[test]
fn duplicate_symbols_are_not_collapsed() {
    let produced: Vec<String> = generator("aa", 2, 2).collect();
    assert_eq!(produced, vec!["aa"; 4]);
}

#[test]
fn exhaustive_count_matches_counter() {
    for (charset, min, max) in [("ab", 1, 2), ("abc", 1, 4), ("@numeric", 2, 3), ("x", 1, 6)] {
        let generator = generator(charset, min, max);
        let expected = count_combinations(generator.alphabet().len(), generator.range());
        assert_eq!(generator.total(), expected);

        let produced = generator.count();
        assert_eq!(BigUint::from(produced), expected, "charset {charset} {min}-{max}");
    }
}

#[test]
fn every_string_respects_range_and_alphabet() {
    let generator = generator("q7!", 2, 4);
    let alphabet = generator.alphabet().clone();
    let range = generator.range();

    let produced: Vec<String> = generator.collect();
    let unique: HashSet<&String> = produced.iter().collect();
    assert_eq!(unique.len(), produced.len());

    for candidate in &produced {
        assert!(range.contains(candidate.chars().count()), "{candidate}");
        assert!(candidate.chars().all(|ch| alphabet.contains(ch)), "{candidate}");
    }
}

#[test]
fn identical_generators_are_deterministic() {
    let first: Vec<String> = generator("@lower", 1, 2).collect();
    let second: Vec<String> = generator("@lower", 1, 2).collect();
    assert_eq!(first, second);
    assert_eq!(first.first().map(String::as_str), Some("a"));
    assert_eq!(first.last().map(String::as_str), Some("zz"));
}

#[test]
fn multibyte_symbols_concatenate_whole() {
    let produced: Vec<String> = generator("é€", 2, 2).collect();
    assert_eq!(produced, vec!["éé", "é€", "€é", "€€"]);
}
