//! Median rate over a sorted collection of observations.

use super::fx_errors::FxError;
use rust_decimal::Decimal;

/// Returns the median of `rates`, which must be sorted ascending by the
/// caller (the store's currency listing already is).
///
/// Odd counts yield the exact middle element. Even counts yield the
/// arithmetic mean of the two elements straddling the middle, i.e. the
/// conventional statistical median.
pub fn median(rates: &[Decimal]) -> Result<Decimal, FxError> {
    if rates.is_empty() {
        return Err(FxError::EmptyRates(
            "cannot take the median of zero observations".to_string(),
        ));
    }

    let middle = rates.len() / 2;
    if rates.len() % 2 == 0 {
        Ok((rates[middle - 1] + rates[middle]) / Decimal::TWO)
    } else {
        Ok(rates[middle])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn odd_count_returns_middle_element() {
        let rates = vec![dec!(0.70), dec!(0.74), dec!(0.80)];
        assert_eq!(median(&rates).unwrap(), dec!(0.74));
    }

    #[test]
    fn even_count_returns_mean_of_middle_pair() {
        let rates = vec![dec!(0.70), dec!(0.74)];
        assert_eq!(median(&rates).unwrap(), dec!(0.72));

        let rates = vec![dec!(0.70), dec!(0.74), dec!(0.80), dec!(3.07)];
        assert_eq!(median(&rates).unwrap(), dec!(0.77));
    }

    #[test]
    fn single_element_is_its_own_median() {
        assert_eq!(median(&[dec!(3.07)]).unwrap(), dec!(3.07));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(median(&[]), Err(FxError::EmptyRates(_))));
    }
}
