// Strong typing over the widget's mixed number/marker arrays.
// A side is a list of tagged terms; an equation is a pair of sides with value semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The only variable symbol the engine understands.
pub const VARIABLE: char = 'x';

/// Default tolerance when comparing evaluated sides.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// One additive unit of a side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Term {
    /// A bare number.
    Constant(f64),
    /// `coefficient * x`.
    Variable(f64),
}

impl Term {
    pub fn is_finite(&self) -> bool {
        match *self {
            Term::Constant(v) | Term::Variable(v) => v.is_finite(),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    /// Same kind of term with its number replaced.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Term {
        match self {
            Term::Constant(v) => Term::Constant(f(v)),
            Term::Variable(c) => Term::Variable(f(c)),
        }
    }
}

/// One side of an equation, terms in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Side(Vec<Term>);

impl Side {
    pub fn new(terms: Vec<Term>) -> Self {
        Side(terms)
    }

    /// The side `0`.
    pub fn zero() -> Self {
        Side(vec![Term::Constant(0.0)])
    }

    pub fn terms(&self) -> &[Term] {
        &self.0
    }

    pub fn terms_mut(&mut self) -> &mut Vec<Term> {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_variable(&self) -> bool {
        self.0.iter().any(Term::is_variable)
    }
}

/// `left = right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub left: Side,
    pub right: Side,
}

impl Equation {
    pub fn new(left: Side, right: Side) -> Self {
        Equation { left, right }
    }

    pub fn has_variable(&self) -> bool {
        self.left.has_variable() || self.right.has_variable()
    }
}

/// Elementary operation applied to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    /// Multiply and divide reject a zero operand.
    pub fn is_scaling(&self) -> bool {
        matches!(self, OperationKind::Multiply | OperationKind::Divide)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(OperationKind::Add),
            "subtract" => Ok(OperationKind::Subtract),
            "multiply" => Ok(OperationKind::Multiply),
            "divide" => Ok(OperationKind::Divide),
            other => Err(EngineError::UnknownOperation(other.to_string())),
        }
    }
}

/// An applied operation and the equation it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub kind: OperationKind,
    pub value: f64,
    pub equation: Equation,
}

/// Value of `x` once the equation is in solved form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub value: f64,
}

/// Result of substituting a candidate into the original equation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub left_value: f64,
    pub right_value: f64,
    pub is_correct: bool,
}

/// Language used for the step log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StepLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

/// Engine configuration passed from JS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Equation loaded on construction and on reset.
    #[serde(default = "default_initial_equation")]
    pub initial_equation: String,
    /// Maximum |left - right| accepted by verification.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub language: StepLanguage,
}

fn default_initial_equation() -> String {
    "2x+3=9".to_string()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            initial_equation: default_initial_equation(),
            tolerance: default_tolerance(),
            language: StepLanguage::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        crate::parser::parse(&self.initial_equation)
            .map(|_| ())
            .map_err(|e| EngineError::InvalidConfig(format!("initial_equation: {}", e)))
    }
}

/// Snapshot returned to JS after every call that changes state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationView {
    pub left_markup: String,
    pub right_markup: String,
    pub equation_text: String,
    pub steps: Vec<String>,
    pub solution: Option<f64>,
    pub can_undo: bool,
}
