//! Property tests for lenient numeric coercion.

use proptest::prelude::*;

use enroll_transform::parse_lenient;

proptest! {
    // Coercing well-formed numeric strings preserves the total exactly.
    #[test]
    fn well_formed_sum_is_preserved(values in prop::collection::vec(0u32..10_000, 1..50)) {
        let expected: f64 = values.iter().map(|value| f64::from(*value)).sum();
        let coerced: f64 = values
            .iter()
            .map(|value| parse_lenient(&value.to_string()).or_zero())
            .sum();
        prop_assert_eq!(coerced, expected);
    }

    // A malformed cell contributes exactly zero to the total.
    #[test]
    fn malformed_cell_contributes_zero(
        values in prop::collection::vec(0u32..10_000, 1..50),
        junk in "[a-zA-Z /]{1,12}",
    ) {
        prop_assume!(junk.trim().parse::<f64>().is_err());
        let well_formed: f64 = values.iter().map(|value| f64::from(*value)).sum();
        let mut cells: Vec<String> = values.iter().map(|value| value.to_string()).collect();
        cells.push(junk);
        let coerced: f64 = cells.iter().map(|cell| parse_lenient(cell).or_zero()).sum();
        prop_assert_eq!(coerced, well_formed);
    }

    // Parsing never panics on arbitrary input.
    #[test]
    fn parse_is_total(cell in "\\PC*") {
        let _ = parse_lenient(&cell).or_zero();
    }
}
