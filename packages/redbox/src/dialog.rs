use std::rc::Rc;

use crate::{CapturedError, ExtendedError, ThrownValue};

/// Message used when the thrown value carried nothing usable.
const UNSPECIFIED_ERROR: &str = "Unspecified error";

/// The host's exception-reporting subsystem.
///
/// Owns everything the dialog does not: presentation, persistence, remote
/// reporting. Implementations must not panic back into the dialog.
pub trait ExceptionHandler {
    /// Report one normalized error. `is_fatal` marks errors the app cannot
    /// recover from; lifecycle errors are always reported non-fatal because
    /// a boundary already contained them.
    fn handle_exception(&self, error: Rc<ExtendedError>, is_fatal: bool);
}

impl<F> ExceptionHandler for F
where
    F: Fn(Rc<ExtendedError>, bool),
{
    fn handle_exception(&self, error: Rc<ExtendedError>, is_fatal: bool) {
        self(error, is_fatal)
    }
}

/// Intercept a lifecycle error and ensure it reaches the exceptions manager
/// with the component stack attached.
///
/// Returns `false` to tell the renderer to skip its default behavior of
/// logging error details to the console. Console errors are routed to the
/// native redbox controller, and forwarding to the handler already reaches
/// it, so logging again would report the error twice.
pub fn show_error_dialog(handler: &dyn ExceptionHandler, captured: CapturedError) -> bool {
    let CapturedError {
        component_stack,
        error: thrown,
        ..
    } = captured;

    // Typically a component throws a real error, but strings and other
    // values show up as well.
    let mut error = match thrown {
        ThrownValue::Error(error) => error,
        ThrownValue::Message(message) => Rc::new(ExtendedError::synthetic(message)),
        ThrownValue::Other(_) => Rc::new(ExtendedError::synthetic(UNSPECIFIED_ERROR)),
    };

    // Annotation is best effort: an aliased error cannot be written to, and
    // the dialog still has to forward it.
    if ExtendedError::annotate(&mut error, &component_stack).is_err() {
        tracing::trace!("skipping component stack annotation of an aliased error");
    }

    handler.handle_exception(error, false);

    false
}

/// A lifecycle error hook bound to one exception handler.
///
/// Renderers hold one of these and invoke it with each [`CapturedError`]
/// that escapes a boundary, inspecting the returned bool to decide whether
/// to also run their default logging.
pub struct ErrorDialog<H> {
    handler: H,
}

impl<H: ExceptionHandler> ErrorDialog<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// See [`show_error_dialog`].
    pub fn show_error_dialog(&self, captured: CapturedError) -> bool {
        show_error_dialog(&self.handler, captured)
    }
}
