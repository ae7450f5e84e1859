//! Diagnostic types and rendering for minicel.
//!
//! Every engine error maps to an [`ErrorCode`] and converts into a
//! [`Diagnostic`], which the [`TerminalEmitter`] renders for humans.

mod diagnostic;
mod emitter;
mod error_code;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::ErrorCode;
