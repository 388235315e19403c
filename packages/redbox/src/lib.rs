//! Routes component lifecycle errors from a UI renderer into a host
//! exceptions manager.
//!
//! A renderer's error boundary catches whatever a component threw during
//! render, update, or mount and hands it to the registered [`ErrorDialog`] as
//! a [`CapturedError`]. The dialog coerces the thrown value into an
//! [`ExtendedError`] with a usable message and backtrace, stamps the component
//! stack onto it, and forwards it to the injected [`ExceptionHandler`], which
//! owns presentation (the native redbox), persistence, and remote reporting.
//! The hook returns `false` so the renderer skips its own default logging of
//! an error that has already been reported.

mod captured;
mod dialog;
mod extended;
mod thrown;

pub use captured::CapturedError;
pub use dialog::{show_error_dialog, ErrorDialog, ExceptionHandler};
pub use extended::{AnnotateError, ExtendedError};
pub use thrown::ThrownValue;
