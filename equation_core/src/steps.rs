// Step log text, one line per applied operation.

use crate::format::format_number;
use crate::types::*;

/// Header line for a freshly loaded equation.
pub fn describe_initial(language: StepLanguage, equation_text: &str) -> String {
    match language {
        StepLanguage::English => format!("Initial equation: {}", equation_text),
        StepLanguage::Spanish => format!("Ecuación inicial: {}", equation_text),
    }
}

/// Human-readable description of an operation applied to both sides.
pub fn describe_operation(language: StepLanguage, kind: OperationKind, value: f64) -> String {
    let v = format_number(value);
    match (language, kind) {
        (StepLanguage::English, OperationKind::Add) => format!("Add {} to both sides", v),
        (StepLanguage::English, OperationKind::Subtract) => {
            format!("Subtract {} from both sides", v)
        }
        (StepLanguage::English, OperationKind::Multiply) => {
            format!("Multiply both sides by {}", v)
        }
        (StepLanguage::English, OperationKind::Divide) => format!("Divide both sides by {}", v),
        (StepLanguage::Spanish, OperationKind::Add) => format!("Sumar {} a ambos lados", v),
        (StepLanguage::Spanish, OperationKind::Subtract) => {
            format!("Restar {} de ambos lados", v)
        }
        (StepLanguage::Spanish, OperationKind::Multiply) => {
            format!("Multiplicar ambos lados por {}", v)
        }
        (StepLanguage::Spanish, OperationKind::Divide) => {
            format!("Dividir ambos lados por {}", v)
        }
    }
}
