//! Tests for the digit-decomposition converter

use rstest::rstest;

use romanize::domain::{DomainError, NumeralConverter, TallyNumeralConverter, MAX_NUMERAL};

#[ctor::ctor]
fn init() {
    romanize::util::testing::init_test_setup();
}

fn converter() -> TallyNumeralConverter {
    TallyNumeralConverter
}

#[rstest]
#[case(1, "I")]
#[case(2, "II")]
#[case(3, "III")]
#[case(4, "IV")]
#[case(5, "V")]
#[case(6, "VI")]
#[case(9, "IX")]
#[case(14, "XIV")]
#[case(40, "XL")]
#[case(49, "XLIX")]
#[case(90, "XC")]
#[case(400, "CD")]
#[case(900, "CM")]
#[case(1666, "MDCLXVI")]
#[case(1992, "MCMXCII")]
#[case(2024, "MMXXIV")]
#[case(3000, "MMM")]
fn given_known_value_when_converting_then_returns_expected_numeral(
    #[case] value: i32,
    #[case] expected: &str,
) {
    assert_eq!(converter().to_numeral(value).unwrap(), expected);
}

#[test]
fn given_zero_when_converting_then_fails_with_non_positive() {
    assert_eq!(converter().to_numeral(0), Err(DomainError::NonPositive(0)));
}

#[test]
fn given_negative_value_when_converting_then_fails_with_non_positive() {
    assert_eq!(
        converter().to_numeral(-7),
        Err(DomainError::NonPositive(-7))
    );
}

#[test]
fn given_value_above_cap_when_converting_then_fails_with_exceeds_range() {
    assert_eq!(
        converter().to_numeral(3001),
        Err(DomainError::ExceedsRange(3001))
    );
}

#[test]
fn given_max_value_when_converting_then_it_is_still_accepted() {
    assert_eq!(converter().to_numeral(MAX_NUMERAL).unwrap(), "MMM");
}

#[test]
fn given_any_valid_value_when_converting_then_result_uses_only_roman_glyphs() {
    for value in 1..=MAX_NUMERAL {
        let numeral = converter().to_numeral(value).unwrap();
        assert!(!numeral.is_empty(), "empty numeral for {value}");
        assert!(
            numeral.chars().all(|c| "IVXLCDM".contains(c)),
            "unexpected glyph in {numeral} for {value}"
        );
    }
}

#[test]
fn given_same_value_twice_when_converting_then_results_are_identical() {
    let converter = converter();
    assert_eq!(
        converter.to_numeral(1992).unwrap(),
        converter.to_numeral(1992).unwrap()
    );
}

#[test]
fn given_converter_behind_trait_object_when_converting_then_behavior_is_unchanged() {
    let converter: Box<dyn NumeralConverter> = Box::new(TallyNumeralConverter);
    assert_eq!(converter.to_numeral(39).unwrap(), "XXXIX");
}
