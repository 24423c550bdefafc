use super::*;
use proptest::prelude::*;

fn out_of_range(width: DigitWidth) -> impl Strategy<Value = i64> {
    prop_oneof![i64::MIN..width.min(), (width.max() + 1)..=i64::MAX]
}

// Property: arithmetic decomposition matches the decimal text of the number
proptest! {
    #[test]
    fn prop_digits_match_decimal_text(n in 100_000i64..=999_999) {
        let digits = Digits::of_width(n, DigitWidth::Six).unwrap();
        let text: Vec<u8> = n.to_string().bytes().map(|b| b - b'0').collect();

        prop_assert_eq!(digits.as_slice(), text.as_slice());
    }
}

// Property: every decomposition has exactly the width's digit count, all 0..=9
proptest! {
    #[test]
    fn prop_digit_count_matches_width(
        (width, n) in prop_oneof![Just(DigitWidth::Three), Just(DigitWidth::Six)]
            .prop_flat_map(|w| (Just(w), w.min()..=w.max()))
    ) {
        let digits = Digits::of_width(n, width).unwrap();

        prop_assert_eq!(digits.as_slice().len(), width.digit_count());
        prop_assert!(digits.as_slice().iter().all(|&d| d <= 9));
        prop_assert!(digits.as_slice()[0] != 0);
    }
}

// Property: digit sum never exceeds 9 per digit
proptest! {
    #[test]
    fn prop_sum_of_digits_bounded(n in 100i64..=999) {
        let sum = sum_of_digits(n).unwrap();
        prop_assert!((1..=27).contains(&sum));
    }
}

// Property: ticket verdict agrees with comparing the two halves of the text
proptest! {
    #[test]
    fn prop_ticket_matches_text_halves(n in 100_000i64..=999_999) {
        let text = n.to_string();
        let half = |s: &str| s.chars().map(|c| c.to_digit(10).unwrap()).sum::<u32>();
        let expected = half(&text[..3]) == half(&text[3..]);

        prop_assert_eq!(is_lucky_ticket(n), Ok(expected));
    }
}

// Property: anything outside the ranges is rejected
proptest! {
    #[test]
    fn prop_sum_of_digits_rejects_outside(n in out_of_range(DigitWidth::Three)) {
        let is_out_of_range = matches!(sum_of_digits(n), Err(InvalidInputError::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn prop_ticket_rejects_outside(n in out_of_range(DigitWidth::Six)) {
        let is_out_of_range = matches!(is_lucky_ticket(n), Err(InvalidInputError::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }
}

// Property: fractional text is never accepted as an integer
proptest! {
    #[test]
    fn prop_fractional_text_rejected(whole in 100i64..=999, frac in 1u32..=99) {
        let text = format!("{whole}.{frac}");
        let is_not_integer = matches!(
            sum_of_digits_str(&text),
            Err(InvalidInputError::NotAnInteger { .. })
        );
        prop_assert!(is_not_integer);
    }
}
