// equation_core: Rust/WASM engine for the algebra balance widget.
// Parsing, balanced operations, simplification and solution checks live here; JS only renders.

mod error;
mod format;
mod operator;
mod parser;
mod session;
mod simplify;
mod solver;
mod steps;
mod types;
mod verify;

use wasm_bindgen::prelude::*;

pub use error::EngineError;
pub use format::{equation_to_string, format_number, to_canonical_string, to_display_markup};
pub use operator::{apply, parse_operand};
pub use parser::{parse, parse_side};
pub use session::BalanceSession;
pub use simplify::{simplify, simplify_equation};
pub use solver::is_solved;
pub use steps::{describe_initial, describe_operation};
pub use types::*;
pub use verify::{evaluate, verify, verify_with_tolerance};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Algebra balance exposed to JavaScript.
/// The page creates one instance and hands it to the widget controller.
#[wasm_bindgen]
pub struct AlgebraBalance {
    session: BalanceSession,
}

#[wasm_bindgen]
impl AlgebraBalance {
    /// Create a balance from a JSON `EngineConfig`; `"{}"` uses the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<AlgebraBalance, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        let session = BalanceSession::new(config).map_err(to_js)?;
        Ok(AlgebraBalance { session })
    }

    /// Load a new equation. Returns the view JSON.
    pub fn set_equation(&mut self, text: &str) -> Result<String, JsValue> {
        self.session.set_equation(text).map_err(to_js)?;
        self.view()
    }

    /// Apply `add`, `subtract`, `multiply` or `divide` with the raw text of the value box.
    /// Returns the view JSON.
    pub fn apply_operation(&mut self, kind: &str, value_text: &str) -> Result<String, JsValue> {
        let kind: OperationKind = kind.parse().map_err(to_js)?;
        let value = parse_operand(value_text).map_err(to_js)?;
        self.session.apply_operation(kind, value).map_err(to_js)?;
        self.view()
    }

    /// Apply the last chosen operation again (Enter in the value box).
    pub fn repeat_last_operation(&mut self, value_text: &str) -> Result<String, JsValue> {
        let value = parse_operand(value_text).map_err(to_js)?;
        self.session.repeat_last_operation(value).map_err(to_js)?;
        self.view()
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn reset(&mut self) -> Result<String, JsValue> {
        self.session.reset().map_err(to_js)?;
        self.view()
    }

    /// Value of `x` if the equation is in solved form.
    pub fn solution(&self) -> Option<f64> {
        self.session.solution().map(|s| s.value)
    }

    /// Substitute `candidate` into the original equation.
    /// Returns JSON with { left_value, right_value, is_correct }.
    pub fn verify(&self, candidate: f64) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.verify(candidate))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Current state for rendering.
    /// Returns JSON with markup, equation text, steps, solution and undo availability.
    pub fn view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.view())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn left_markup(&self) -> String {
        to_display_markup(&self.session.current().left)
    }

    pub fn right_markup(&self) -> String {
        to_display_markup(&self.session.current().right)
    }

    pub fn equation_text(&self) -> String {
        equation_to_string(self.session.current())
    }

    pub fn steps(&self) -> js_sys::Array {
        self.session
            .steps()
            .iter()
            .map(|step| JsValue::from_str(step))
            .collect()
    }
}
