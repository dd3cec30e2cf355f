// Solved-state detection. The engine scaffolds the solving process: it only
// recognizes `±x = k` (or `k = ±x`) and never divides through on its own.

use log::info;

use crate::types::*;

/// Returns the value of `x` when one side is exactly `±x` and the other a bare constant.
pub fn is_solved(equation: &Equation) -> Option<Solution> {
    let solution = match (equation.left.terms(), equation.right.terms()) {
        ([Term::Variable(c)], [Term::Constant(k)]) | ([Term::Constant(k)], [Term::Variable(c)])
            if c.abs() == 1.0 =>
        {
            Some(Solution { value: k / c })
        }
        _ => None,
    };

    if let Some(solution) = &solution {
        info!("equation solved: x = {}", solution.value);
    }
    solution
}
