use super::*;

/// Sums every digit that matches the one after it, wrapping from the last
/// digit back to the first.
pub fn sum_adjacent(digits: &Digits) -> Result<i64, Error> {
    let values = digits.as_slice();
    let (first, last) = match (values.first(), values.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(Error::EmptySequence),
    };
    let mut total = values
        .windows(2)
        .filter(|w| w[0] == w[1])
        .map(|w| w[1])
        .sum::<i64>();
    if first == last {
        total += first;
    }
    Ok(total)
}

/// Sums every digit that matches the digit `len / 2` positions further round
/// the circle. On even lengths each matching pair is counted from both sides.
pub fn sum_half_offset(digits: &Digits) -> Result<i64, Error> {
    let values = digits.as_slice();
    if values.is_empty() {
        return Err(Error::EmptySequence);
    }
    let len = values.len();
    let step = len / 2;
    let total = values
        .iter()
        .enumerate()
        .filter(|&(index, current)| *current == values[(index + step) % len])
        .map(|(_, current)| *current)
        .sum();
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{Arbitrary, Gen, QuickCheck};

    fn adjacent(s: &str) -> i64 {
        sum_adjacent(&parser::parse(s).unwrap()).unwrap()
    }

    fn half_offset(s: &str) -> i64 {
        sum_half_offset(&parser::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn adjacent_provided_testcase_1() {
        assert_eq!(adjacent("1122"), 3);
    }

    #[test]
    fn adjacent_provided_testcase_2() {
        assert_eq!(adjacent("1111"), 4);
    }

    #[test]
    fn adjacent_provided_testcase_3() {
        assert_eq!(adjacent("1234"), 0);
    }

    #[test]
    fn adjacent_provided_testcase_4() {
        assert_eq!(adjacent("91212129"), 9);
    }

    #[test]
    fn half_offset_provided_testcase_1() {
        assert_eq!(half_offset("1212"), 6);
    }

    #[test]
    fn half_offset_provided_testcase_2() {
        assert_eq!(half_offset("1122"), 0);
    }

    #[test]
    fn half_offset_provided_testcase_3() {
        assert_eq!(half_offset("1221"), 0);
    }

    #[test]
    fn half_offset_provided_testcase_4() {
        assert_eq!(half_offset("123425"), 4);
    }

    #[test]
    fn half_offset_provided_testcase_5() {
        assert_eq!(half_offset("123123"), 12);
    }

    #[test]
    fn half_offset_provided_testcase_6() {
        assert_eq!(half_offset("12131415"), 4);
    }

    #[test]
    fn single_digit_wraps_onto_itself() {
        assert_eq!(adjacent("5"), 5);
        assert_eq!(half_offset("5"), 5);
    }

    #[test]
    fn alternating_digits_never_match_neighbours() {
        assert_eq!(adjacent("1212"), 0);
    }

    #[test]
    fn odd_length_half_offset() {
        // step truncates to 1 for length 3.
        assert_eq!(half_offset("112"), 1);
        assert_eq!(half_offset("121"), 1);
    }

    #[test]
    fn out_of_range_values_are_summed() {
        assert_eq!(adjacent("aa"), 98);
        assert_eq!(adjacent("  "), -32);
        assert_eq!(half_offset("//"), -2);
    }

    #[test]
    fn empty_sequence() {
        let empty = Digits::new(vec![]);
        assert!(matches!(sum_adjacent(&empty), Err(Error::EmptySequence)));
        assert!(matches!(sum_half_offset(&empty), Err(Error::EmptySequence)));
    }

    #[test]
    fn sums_are_pure() {
        let digits = parser::parse("91212129").unwrap();
        let before = digits.clone();
        assert_eq!(sum_adjacent(&digits).unwrap(), sum_adjacent(&digits).unwrap());
        assert_eq!(
            sum_half_offset(&digits).unwrap(),
            sum_half_offset(&digits).unwrap()
        );
        assert_eq!(digits, before);
    }

    #[derive(Debug, Clone)]
    struct EvenDigits(Digits);

    impl Arbitrary for EvenDigits {
        fn arbitrary(g: &mut Gen) -> EvenDigits {
            let half = usize::arbitrary(g) % g.size().max(1) + 1;
            EvenDigits(Digits::new(
                (0..half * 2)
                    .map(|_| *g.choose(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap())
                    .collect(),
            ))
        }
    }

    fn half_offset_even_prop(input: EvenDigits) -> bool {
        sum_half_offset(&input.0).unwrap() % 2 == 0
    }

    #[test]
    fn half_offset_counts_pairs_twice() {
        for size in 1..11 {
            let mut qc = QuickCheck::new().gen(Gen::new(size));
            qc.quickcheck(half_offset_even_prop as fn(EvenDigits) -> bool);
        }
    }

    fn uniform_prop(digit: u8, len: u8) -> bool {
        let digit = (digit % 10) as i64;
        let len = len as usize % 32 + 1;
        let digits = Digits::new(vec![digit; len]);
        sum_adjacent(&digits).unwrap() == digit * len as i64
            && sum_half_offset(&digits).unwrap() == digit * len as i64
    }

    #[test]
    fn uniform_sequences_match_everywhere() {
        QuickCheck::new().quickcheck(uniform_prop as fn(u8, u8) -> bool);
    }
}
