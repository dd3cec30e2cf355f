// One live balance: current equation, the original snapshot, operation history and step log.
// Every mutating call either succeeds completely or leaves the session untouched.

use log::{debug, warn};

use crate::error::EngineError;
use crate::format::{equation_to_string, to_display_markup};
use crate::operator;
use crate::parser::parse;
use crate::solver::is_solved;
use crate::steps::{describe_initial, describe_operation};
use crate::types::*;
use crate::verify::verify_with_tolerance;

/// Stateful engine behind one algebra balance widget.
#[derive(Debug, Clone)]
pub struct BalanceSession {
    config: EngineConfig,
    current: Equation,
    original: Equation,
    history: Vec<OperationRecord>,
    steps: Vec<String>,
    last_operation: OperationKind,
}

impl BalanceSession {
    /// Create a session loaded with `config.initial_equation`.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let text = config.initial_equation.trim().to_string();
        let equation = parse(&text)?;
        let steps = vec![describe_initial(config.language, &text)];

        Ok(BalanceSession {
            config,
            current: equation.clone(),
            original: equation,
            history: Vec::new(),
            steps,
            last_operation: OperationKind::Add,
        })
    }

    /// Load a new equation, clearing history and steps.
    pub fn set_equation(&mut self, text: &str) -> Result<(), EngineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EngineError::format("please enter an equation"));
        }

        let equation = parse(text).map_err(|e| {
            warn!("rejected equation '{}': {}", text, e);
            e
        })?;

        self.current = equation.clone();
        self.original = equation;
        self.history.clear();
        self.steps = vec![describe_initial(self.config.language, text)];
        Ok(())
    }

    /// Apply an operation to both sides and record it.
    pub fn apply_operation(&mut self, kind: OperationKind, value: f64) -> Result<(), EngineError> {
        let equation = operator::apply(&self.current, kind, value)?;
        self.last_operation = kind;

        self.steps
            .push(describe_operation(self.config.language, kind, value));
        self.history.push(OperationRecord {
            kind,
            value,
            equation: equation.clone(),
        });
        self.current = equation;

        debug!(
            "step {}: {}",
            self.history.len(),
            equation_to_string(&self.current)
        );
        Ok(())
    }

    /// Re-apply the most recently chosen operation with a new value.
    pub fn repeat_last_operation(&mut self, value: f64) -> Result<(), EngineError> {
        self.apply_operation(self.last_operation, value)
    }

    /// Undo one operation. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        self.steps.pop();

        self.current = match self.history.last() {
            Some(record) => record.equation.clone(),
            None => self.original.clone(),
        };
        true
    }

    /// Reload the configured initial equation.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        let text = self.config.initial_equation.clone();
        self.set_equation(&text)
    }

    pub fn current(&self) -> &Equation {
        &self.current
    }

    /// The equation as first parsed, before any operation.
    pub fn original(&self) -> &Equation {
        &self.original
    }

    pub fn history(&self) -> &[OperationRecord] {
        &self.history
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn last_operation(&self) -> OperationKind {
        self.last_operation
    }

    pub fn solution(&self) -> Option<Solution> {
        is_solved(&self.current)
    }

    /// Check a candidate against the original equation.
    pub fn verify(&self, candidate: f64) -> Verification {
        verify_with_tolerance(&self.original, candidate, self.config.tolerance)
    }

    pub fn view(&self) -> EquationView {
        EquationView {
            left_markup: to_display_markup(&self.current.left),
            right_markup: to_display_markup(&self.current.right),
            equation_text: equation_to_string(&self.current),
            steps: self.steps.clone(),
            solution: self.solution().map(|s| s.value),
            can_undo: !self.history.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> BalanceSession {
        BalanceSession::new(EngineConfig::default()).unwrap()
    }

    #[test]
    fn end_to_end_solve() {
        let mut s = session();
        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();
        assert_eq!(equation_to_string(s.current()), "2x = 6");

        s.apply_operation(OperationKind::Divide, 2.0).unwrap();
        assert_eq!(equation_to_string(s.current()), "x = 3");

        let solution = s.solution().unwrap();
        assert_eq!(solution.value, 3.0);
        assert!(s.verify(solution.value).is_correct);

        assert_eq!(
            s.steps(),
            [
                "Initial equation: 2x+3=9",
                "Subtract 3 from both sides",
                "Divide both sides by 2",
            ]
        );
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].kind, OperationKind::Subtract);
        assert_eq!(s.history()[0].value, 3.0);
    }

    #[test]
    fn undo_restores_previous_snapshots() {
        let mut s = session();
        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();
        s.apply_operation(OperationKind::Divide, 2.0).unwrap();

        assert!(s.undo());
        assert_eq!(equation_to_string(s.current()), "2x = 6");
        assert_eq!(s.steps().len(), 2);

        assert!(s.undo());
        assert_eq!(equation_to_string(s.current()), "2x+3 = 9");
        assert_eq!(s.current(), s.original());
        assert_eq!(s.steps().len(), 1);

        assert!(!s.undo());
        assert_eq!(s.steps().len(), 1);
    }

    #[test]
    fn zero_scaling_leaves_state_unchanged() {
        let mut s = session();
        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();
        let before = s.current().clone();

        for kind in [OperationKind::Multiply, OperationKind::Divide] {
            let err = s.apply_operation(kind, 0.0).unwrap_err();
            assert!(matches!(err, EngineError::Domain(_)));
        }
        assert_eq!(s.current(), &before);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.steps().len(), 2);
        assert_eq!(s.last_operation(), OperationKind::Subtract);
    }

    #[test]
    fn overflowing_operation_leaves_state_unchanged() {
        let mut s = session();
        s.apply_operation(OperationKind::Multiply, 1e200).unwrap();
        let before = s.current().clone();

        let err = s.apply_operation(OperationKind::Multiply, 1e200).unwrap_err();
        assert!(matches!(err, EngineError::Domain(_)));
        assert_eq!(s.current(), &before);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.steps().len(), 2);
        assert!(!s.view().equation_text.contains("inf"));

        assert!(s.undo());
        assert_eq!(equation_to_string(s.current()), "2x+3 = 9");
    }

    #[test]
    fn failed_parse_keeps_previous_equation() {
        let mut s = session();
        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();

        assert!(matches!(s.set_equation("3+4=9"), Err(EngineError::Format(_))));
        assert!(matches!(s.set_equation("   "), Err(EngineError::Format(_))));
        assert_eq!(equation_to_string(s.current()), "2x = 6");
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn set_equation_clears_history() {
        let mut s = session();
        s.apply_operation(OperationKind::Add, 1.0).unwrap();
        s.set_equation("x-5=10").unwrap();

        assert!(s.history().is_empty());
        assert_eq!(s.steps(), ["Initial equation: x-5=10"]);
        assert_eq!(s.original(), s.current());
    }

    #[test]
    fn verify_uses_original_equation() {
        let mut s = session();
        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();

        let result = s.verify(4.0);
        assert_eq!(result.left_value, 11.0);
        assert_eq!(result.right_value, 9.0);
        assert!(!result.is_correct);
    }

    #[test]
    fn repeat_last_operation_reuses_kind() {
        let mut s = session();
        s.set_equation("4x=16").unwrap();
        s.apply_operation(OperationKind::Divide, 2.0).unwrap();
        s.repeat_last_operation(2.0).unwrap();

        assert_eq!(s.solution(), Some(Solution { value: 4.0 }));
        assert_eq!(s.history()[1].kind, OperationKind::Divide);
    }

    #[test]
    fn repeat_defaults_to_add() {
        let mut s = session();
        s.repeat_last_operation(1.0).unwrap();
        assert_eq!(equation_to_string(s.current()), "2x+4 = 10");
    }

    #[test]
    fn reset_restores_initial_equation() {
        let mut s = session();
        s.apply_operation(OperationKind::Multiply, 2.0).unwrap();
        s.set_equation("x=1").unwrap();
        s.reset().unwrap();

        assert_eq!(equation_to_string(s.current()), "2x+3 = 9");
        assert!(s.history().is_empty());
        assert_eq!(s.steps().len(), 1);
        assert_eq!(s.last_operation(), OperationKind::Multiply);
    }

    #[test]
    fn spanish_step_log() {
        let config = EngineConfig {
            language: StepLanguage::Spanish,
            ..Default::default()
        };
        let mut s = BalanceSession::new(config).unwrap();
        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();

        assert_eq!(s.steps()[0], "Ecuación inicial: 2x+3=9");
        assert_eq!(s.steps()[1], "Restar 3 de ambos lados");
    }

    #[test]
    fn view_reports_solution_and_undo() {
        let mut s = session();
        let view = s.view();
        assert_eq!(view.equation_text, "2x+3 = 9");
        assert!(view.solution.is_none());
        assert!(!view.can_undo);

        s.apply_operation(OperationKind::Subtract, 3.0).unwrap();
        s.apply_operation(OperationKind::Divide, 2.0).unwrap();
        let view = s.view();
        assert_eq!(view.solution, Some(3.0));
        assert!(view.can_undo);
        assert_eq!(view.steps.len(), 3);
        assert!(view.left_markup.contains("variable-block"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            tolerance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            BalanceSession::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
