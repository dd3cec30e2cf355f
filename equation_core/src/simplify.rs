// Combine like terms: one variable term and one constant per side, zeros dropped.

use crate::types::*;

/// Collapse a side into at most `[coefficient·x, constant]`.
///
/// A side with nothing left becomes `0`. Idempotent.
pub fn simplify(side: &Side) -> Side {
    let (coefficient, constant) = side
        .terms()
        .iter()
        .fold((0.0, 0.0), |(c, k), term| match *term {
            Term::Variable(v) => (c + v, k),
            Term::Constant(v) => (c, k + v),
        });

    let mut terms = Vec::with_capacity(2);
    if coefficient != 0.0 {
        terms.push(Term::Variable(coefficient));
    }
    if constant != 0.0 {
        terms.push(Term::Constant(constant));
    }

    if terms.is_empty() {
        Side::zero()
    } else {
        Side::new(terms)
    }
}

/// Simplify both sides.
pub fn simplify_equation(equation: &Equation) -> Equation {
    Equation::new(simplify(&equation.left), simplify(&equation.right))
}
