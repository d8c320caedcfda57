//! Lint rules

pub mod no_function_apply;
pub mod no_jsx_button;
pub mod no_literal;

// Re-export rule structs
pub use no_function_apply::NoFunctionApply;
pub use no_jsx_button::NoJsxButton;
pub use no_literal::NoLiteral;
