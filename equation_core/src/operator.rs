// Balanced operations: whatever is done to one side is done to the other.

use log::{debug, warn};

use crate::error::EngineError;
use crate::simplify::simplify;
use crate::types::*;

/// Apply `kind` with `value` to both sides and simplify the result.
///
/// The input equation is never modified. Zero is rejected for multiply and
/// divide alike so a student cannot wipe the equation out by accident.
pub fn apply(
    equation: &Equation,
    kind: OperationKind,
    value: f64,
) -> Result<Equation, EngineError> {
    if !value.is_finite() {
        warn!("rejected {} with non-finite operand {}", kind, value);
        return Err(EngineError::InvalidOperand(format!(
            "{} is not a valid number",
            value
        )));
    }

    if value == 0.0 && kind.is_scaling() {
        warn!("rejected {} by zero", kind);
        return Err(EngineError::Domain(format!("cannot {} by zero", kind)));
    }

    let left = apply_to_side(&equation.left, kind, value);
    let right = apply_to_side(&equation.right, kind, value);
    let result = Equation::new(simplify(&left), simplify(&right));
    check_result(equation, &result, kind, value)?;

    debug!("{} {} -> {:?}", kind, value, result);
    Ok(result)
}

/// Reject results that left the representable range: an overflowed term, or a
/// variable that underflowed to nothing. Either would be unrecoverable.
fn check_result(
    before: &Equation,
    after: &Equation,
    kind: OperationKind,
    value: f64,
) -> Result<(), EngineError> {
    let sides = [(&before.left, &after.left), (&before.right, &after.right)];

    for (old, new) in sides {
        if new.terms().iter().any(|t| !t.is_finite()) {
            warn!("rejected {} {}: result overflows", kind, value);
            return Err(EngineError::Domain(format!(
                "cannot {} by {}: the result is too large",
                kind, value
            )));
        }
        if simplify(old).has_variable() && !new.has_variable() {
            warn!("rejected {} {}: the variable vanishes", kind, value);
            return Err(EngineError::Domain(format!(
                "cannot {} by {}: the variable would vanish",
                kind, value
            )));
        }
    }
    Ok(())
}

/// Read the operand typed into the widget's value box.
pub fn parse_operand(text: &str) -> Result<f64, EngineError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EngineError::InvalidOperand(format!(
            "'{}' is not a valid number",
            text
        ))),
    }
}

fn apply_to_side(side: &Side, kind: OperationKind, value: f64) -> Side {
    let mut side = side.clone();
    match kind {
        OperationKind::Add => add_constant(&mut side, value),
        OperationKind::Subtract => add_constant(&mut side, -value),
        OperationKind::Multiply => scale(&mut side, |v| v * value),
        OperationKind::Divide => scale(&mut side, |v| v / value),
    }
    side
}

/// Add to the first constant term, or append one if there is none.
fn add_constant(side: &mut Side, value: f64) {
    let terms = side.terms_mut();
    match terms.iter_mut().find(|t| !t.is_variable()) {
        Some(term) => *term = term.map(|v| v + value),
        None => terms.push(Term::Constant(value)),
    }
}

fn scale(side: &mut Side, f: impl Fn(f64) -> f64) {
    for term in side.terms_mut().iter_mut() {
        *term = term.map(&f);
    }
}
