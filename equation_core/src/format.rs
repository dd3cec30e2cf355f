// Display helpers: HTML fragments for the balance pans and plain text for the equation line.
// Pure functions; the JS layer owns the DOM.

use crate::types::*;

/// Integers print without a decimal point, everything else with two decimals.
pub fn format_number(n: f64) -> String {
    // Avoid "-0" after scaling a zero constant by a negative number.
    let n = if n == 0.0 { 0.0 } else { n };
    if n.fract() == 0.0 {
        format!("{}", n)
    } else {
        format!("{:.2}", n)
    }
}

fn format_coefficient(coefficient: f64) -> String {
    if coefficient == 1.0 {
        String::new()
    } else if coefficient == -1.0 {
        "-".to_string()
    } else {
        format_number(coefficient)
    }
}

/// HTML blocks for one pan of the balance.
pub fn to_display_markup(side: &Side) -> String {
    let mut html = String::new();

    for term in side.terms() {
        match *term {
            Term::Variable(c) => {
                html.push_str(&format!(
                    r#"<span class="variable-block" title="Variable: {}x">{}x</span>"#,
                    c,
                    format_coefficient(c)
                ));
            }
            Term::Constant(v) if v != 0.0 => {
                html.push_str(&format!(
                    r#"<span class="constant-block" title="Constante: {}">{}</span>"#,
                    v,
                    format_number(v)
                ));
            }
            Term::Constant(_) => {}
        }
    }

    if html.is_empty() {
        r#"<span class="constant-block">0</span>"#.to_string()
    } else {
        html
    }
}

/// Plain-text expression such as `2x+3` or `-x-4.50`.
pub fn to_canonical_string(side: &Side) -> String {
    let mut out = String::new();

    for term in side.terms() {
        match *term {
            Term::Variable(c) => {
                if !out.is_empty() && c > 0.0 {
                    out.push('+');
                }
                out.push_str(&format_coefficient(c));
                out.push(VARIABLE);
            }
            Term::Constant(v) if v != 0.0 => {
                if !out.is_empty() && v > 0.0 {
                    out.push('+');
                }
                out.push_str(&format_number(v));
            }
            Term::Constant(_) => {}
        }
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// `left = right`.
pub fn equation_to_string(equation: &Equation) -> String {
    format!(
        "{} = {}",
        to_canonical_string(&equation.left),
        to_canonical_string(&equation.right)
    )
}
