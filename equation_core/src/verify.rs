// Substitute a candidate into the original equation and compare both sides.

use crate::types::*;

/// Value of a side with `x = value`.
pub fn evaluate(side: &Side, value: f64) -> f64 {
    side.terms()
        .iter()
        .map(|term| match *term {
            Term::Variable(c) => c * value,
            Term::Constant(k) => k,
        })
        .sum()
}

/// Verify with the default tolerance of `1e-4`.
pub fn verify(original: &Equation, candidate: f64) -> Verification {
    verify_with_tolerance(original, candidate, DEFAULT_TOLERANCE)
}

/// The tolerance absorbs drift accumulated by chained scalar operations.
pub fn verify_with_tolerance(original: &Equation, candidate: f64, tolerance: f64) -> Verification {
    let left_value = evaluate(&original.left, candidate);
    let right_value = evaluate(&original.right, candidate);

    Verification {
        left_value,
        right_value,
        is_correct: (left_value - right_value).abs() < tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use approx::assert_relative_eq;

    #[test]
    fn correct_candidate() {
        let eq = parse("2x+3=9").unwrap();
        let result = verify(&eq, 3.0);
        assert_eq!(result.left_value, 9.0);
        assert_eq!(result.right_value, 9.0);
        assert!(result.is_correct);
    }

    #[test]
    fn wrong_candidate() {
        let eq = parse("2x+3=9").unwrap();
        let result = verify(&eq, 4.0);
        assert_eq!(result.left_value, 11.0);
        assert_eq!(result.right_value, 9.0);
        assert!(!result.is_correct);
    }

    #[test]
    fn variables_on_both_sides() {
        // -x+4 = 2x-8  =>  x = 4
        let eq = parse("-x+4=2x-8").unwrap();
        assert!(verify(&eq, 4.0).is_correct);
    }

    #[test]
    fn tolerance_absorbs_rounding() {
        let eq = parse("3x=1").unwrap();
        let result = verify(&eq, 0.33333);
        assert_relative_eq!(result.left_value, 0.99999, epsilon = 1e-12);
        assert!(result.is_correct);
        assert!(!verify_with_tolerance(&eq, 0.33333, 1e-6).is_correct);
    }
}
