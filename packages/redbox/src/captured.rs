use std::any::Any;
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::ThrownValue;

/// The record a renderer hands to the lifecycle error hook when an error
/// escapes a boundary. Built fresh per error; nothing here outlives the call.
#[derive(Clone)]
pub struct CapturedError {
    /// The chain of components that were rendering when the error occurred,
    /// distinct from the language-level call stack.
    pub component_stack: String,

    /// Whatever the component threw.
    pub error: ThrownValue,

    /// The boundary that caught the error. Opaque to the dialog, which only
    /// routes the error onward.
    pub error_boundary: Option<Rc<dyn Any>>,
}

impl CapturedError {
    pub fn new(component_stack: impl Into<String>, error: impl Into<ThrownValue>) -> Self {
        Self {
            component_stack: component_stack.into(),
            error: error.into(),
            error_boundary: None,
        }
    }

    /// Attach the boundary that caught this error.
    pub fn with_error_boundary(mut self, boundary: Rc<dyn Any>) -> Self {
        self.error_boundary = Some(boundary);
        self
    }
}

impl Debug for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedError")
            .field("component_stack", &self.component_stack)
            .field("error", &self.error)
            .field("error_boundary", &self.error_boundary.is_some())
            .finish()
    }
}
