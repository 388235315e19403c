use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::{self, Display};
use std::rc::Rc;

/// The canonical error type handed to the exceptions manager.
///
/// Every lifecycle error reaches the handler as one of these, whether the
/// component threw a real error or something else entirely. It always carries
/// a message and a backtrace captured where it was built, and it records the
/// component stack once the dialog has stamped it on.
#[derive(Debug)]
pub struct ExtendedError {
    message: String,
    stack: Backtrace,
    source: Option<Box<dyn Error + 'static>>,
    component_stack: Option<String>,
    is_component_error: bool,
}

/// Why stamping contextual fields onto an error did not happen.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateError {
    /// Another handle to the error exists, so it cannot be written to.
    #[error("error value is aliased and cannot be annotated")]
    Aliased,
}

impl ExtendedError {
    /// Build a synthetic error from a bare message. Used when a component
    /// threw something that was not an error to begin with.
    pub fn synthetic(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack: Backtrace::capture(),
            source: None,
            component_stack: None,
            is_component_error: false,
        }
    }

    /// Wrap a real error value, keeping it reachable through
    /// [`Error::source`].
    pub fn from_error(err: impl Error + 'static) -> Self {
        Self {
            message: err.to_string(),
            stack: Backtrace::capture(),
            source: Some(Box::new(err)),
            component_stack: None,
            is_component_error: false,
        }
    }

    /// The message shown at the top of the redbox.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The language-level backtrace captured when this error was built.
    pub fn stack(&self) -> &Backtrace {
        &self.stack
    }

    /// The component chain active when the error occurred, if the dialog was
    /// able to stamp it on.
    pub fn component_stack(&self) -> Option<&str> {
        self.component_stack.as_deref()
    }

    /// Whether this error came out of a component lifecycle rather than
    /// elsewhere in the app.
    pub fn is_component_error(&self) -> bool {
        self.is_component_error
    }

    /// Write the component stack and origin marker onto an error that may
    /// still be shared with the boundary that threw it. Fails when another
    /// handle exists, since the value can no longer be written through this
    /// one.
    pub fn annotate(this: &mut Rc<Self>, component_stack: &str) -> Result<(), AnnotateError> {
        let inner = Rc::get_mut(this).ok_or(AnnotateError::Aliased)?;
        inner.component_stack = Some(component_stack.to_string());
        inner.is_component_error = true;
        Ok(())
    }
}

impl Display for ExtendedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ExtendedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref()
    }
}
