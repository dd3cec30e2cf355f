// Parser for the restricted grammar `<side> = <side>`, where a side is a run of
// signed terms `N`, `Nx`, `x`, `-x`. Whitespace is ignored.

use log::debug;
use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    multi::{many0, many1},
    sequence::pair,
    IResult, Parser,
};

use crate::error::EngineError;
use crate::types::*;

/// Parse a linear equation in `x`.
///
/// The result is not simplified: each typed term is kept in order so the
/// original snapshot reflects what the student entered.
pub fn parse(text: &str) -> Result<Equation, EngineError> {
    let clean: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let (left, right) = clean
        .split_once('=')
        .ok_or_else(|| EngineError::format("the equation must contain '='"))?;

    if left.is_empty() || right.is_empty() {
        return Err(EngineError::format("both sides of the equation need content"));
    }

    let equation = Equation::new(parse_side(left)?, parse_side(right)?);

    if !equation.has_variable() {
        return Err(EngineError::format(format!(
            "the equation must contain the variable '{}'",
            VARIABLE
        )));
    }

    debug!("parsed '{}' into {:?}", clean, equation);
    Ok(equation)
}

/// Parse one side of an equation.
///
/// A run of signs collapses to its last sign (`2x--3` reads as `2x-3`) and a
/// side made of signs only is `0`.
pub fn parse_side(expr: &str) -> Result<Side, EngineError> {
    let terms = match all_consuming(signed_terms).parse(expr) {
        Ok((_, terms)) => terms,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(EngineError::format(format!(
                "cannot read '{}' in '{}'",
                e.input, expr
            )));
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(EngineError::format(format!("incomplete side '{}'", expr)));
        }
    };

    if terms.is_empty() {
        return Ok(Side::zero());
    }

    Ok(Side::new(terms))
}

// side := signs? body? (signs body)* signs?
fn signed_terms(input: &str) -> IResult<&str, Vec<Term>> {
    let (input, lead) = opt(sign_run).parse(input)?;
    let (input, first) = opt(term_body).parse(input)?;
    let (input, rest) = many0(pair(sign_run, term_body)).parse(input)?;
    let (input, _) = opt(sign_run).parse(input)?;

    let mut terms = Vec::with_capacity(rest.len() + 1);
    if let Some(term) = first {
        let sign = lead.unwrap_or(1.0);
        terms.push(term.map(|v| sign * v));
    }
    terms.extend(rest.into_iter().map(|(sign, term)| term.map(|v| sign * v)));

    Ok((input, terms))
}

/// One or more `+`/`-`; the last one wins.
fn sign_run(input: &str) -> IResult<&str, f64> {
    map(many1(one_of("+-")), |signs: Vec<char>| {
        if signs.last() == Some(&'-') {
            -1.0
        } else {
            1.0
        }
    })
    .parse(input)
}

/// `N`, `Nx` or `x`. The variable may only close a term.
fn term_body(input: &str) -> IResult<&str, Term> {
    alt((
        map(
            pair(number, opt(char(VARIABLE))),
            |(n, var): (f64, Option<char>)| match var {
                Some(_) => Term::Variable(n),
                None => Term::Constant(n),
            },
        ),
        map(char(VARIABLE), |_: char| Term::Variable(1.0)),
    ))
    .parse(input)
}

/// Decimal literal: `3`, `3.5`, `5.` or `.5`. No exponents, no `inf`.
fn number(input: &str) -> IResult<&str, f64> {
    verify(map_res(decimal, str::parse::<f64>), |v: &f64| v.is_finite()).parse(input)
}

fn decimal(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))
    .parse(input)
}
