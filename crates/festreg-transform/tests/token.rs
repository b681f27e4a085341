//! Property tests: token derivation, desk extraction, fee aggregation.

use proptest::prelude::{ProptestConfig, any, proptest};

use festreg_transform::{
    MANAGER_TOKEN_LEN, SMS_TOKEN_LEN, any_to_f64, derive_token, desk_code, mobile_digits,
    sum_by_key,
};
use polars::df;
use polars::prelude::AnyValue;

#[test]
fn token_is_deterministic() {
    let first = derive_token("event-secret", "9999999999", SMS_TOKEN_LEN);
    let second = derive_token("event-secret", "9999999999", SMS_TOKEN_LEN);
    assert_eq!(first, second);
}

#[test]
fn token_lengths_match_contract() {
    assert_eq!(derive_token("k", "m", SMS_TOKEN_LEN).len(), 6);
    assert_eq!(derive_token("k", "m", MANAGER_TOKEN_LEN).len(), 8);
}

#[test]
fn token_is_lowercase_hex() {
    let token = derive_token("key", "message", MANAGER_TOKEN_LEN);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn token_changes_with_message() {
    let a = derive_token("key", "9999999999", SMS_TOKEN_LEN);
    let b = derive_token("key", "9999999998", SMS_TOKEN_LEN);
    assert_ne!(a, b);
}

#[test]
fn token_changes_with_key() {
    let a = derive_token("key-one", "message", MANAGER_TOKEN_LEN);
    let b = derive_token("key-two", "message", MANAGER_TOKEN_LEN);
    assert_ne!(a, b);
}

#[test]
fn desk_code_takes_prefix_before_last_slash() {
    assert_eq!(desk_code("CS/MAIN/101"), "CS/MAIN");
    assert_eq!(desk_code("A/1"), "A");
    assert_eq!(desk_code("101"), "");
    assert_eq!(desk_code(""), "");
}

#[test]
fn mobile_digits_normalizes_numeric_forms() {
    assert_eq!(
        mobile_digits(AnyValue::Float64(9_999_999_999.0)),
        Some("9999999999".to_string())
    );
    assert_eq!(
        mobile_digits(AnyValue::String("99999 99999")),
        Some("9999999999".to_string())
    );
    assert_eq!(mobile_digits(AnyValue::Null), None);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn desk_code_never_includes_last_segment(prefix in "[A-Z]{1,4}(/[A-Z0-9]{1,4}){0,3}", last in "[0-9]{1,5}") {
        let receipt = format!("{prefix}/{last}");
        assert_eq!(desk_code(&receipt), prefix);
    }

    #[test]
    fn desk_code_without_slash_is_empty(receipt in "[A-Za-z0-9 -]{0,12}") {
        assert_eq!(desk_code(&receipt), "");
    }

    #[test]
    fn token_length_is_respected(msg in any::<String>(), len in 1usize..=32) {
        let token = derive_token("secret", &msg, len);
        assert_eq!(token.len(), len);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn grouped_fee_totals_conserve_the_input_sum(
        rows in proptest::collection::vec(("[A-D]{1,3}", 0.0f64..10_000.0), 1..40)
    ) {
        let (desks, fees): (Vec<String>, Vec<f64>) = rows.into_iter().unzip();
        let input_total: f64 = fees.iter().sum();
        let frame = df!("desk" => desks, "fees" => fees).expect("build frame");
        let grouped = sum_by_key(&frame, "desk", "fees").expect("group");
        let column = grouped.column("fees").expect("fees column");
        let grouped_total: f64 = (0..grouped.height())
            .map(|idx| any_to_f64(column.get(idx).expect("cell")).unwrap_or(0.0))
            .sum();
        assert!((grouped_total - input_total).abs() < 1e-6);
    }
}
