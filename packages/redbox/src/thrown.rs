use std::any::Any;
use std::error::Error;
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::ExtendedError;

/// A value a component threw during render, update, or mount.
///
/// Components are allowed to fail with more than real errors: bare strings
/// and arbitrary values show up as well. Each case gets its own variant so
/// the dialog can match on them instead of probing at runtime.
#[derive(Clone)]
pub enum ThrownValue {
    /// An actual platform error object.
    Error(Rc<ExtendedError>),

    /// A bare string.
    Message(String),

    /// Anything else: unit values, numbers, plain data.
    Other(Rc<dyn Any>),
}

impl ThrownValue {
    /// Wrap a real error value into the platform error type.
    pub fn from_error(err: impl Error + 'static) -> Self {
        Self::Error(Rc::new(ExtendedError::from_error(err)))
    }

    /// Carry a thrown value that is neither an error nor a string.
    pub fn other(value: impl Any) -> Self {
        Self::Other(Rc::new(value))
    }
}

impl From<ExtendedError> for ThrownValue {
    fn from(err: ExtendedError) -> Self {
        Self::Error(Rc::new(err))
    }
}

impl From<Rc<ExtendedError>> for ThrownValue {
    fn from(err: Rc<ExtendedError>) -> Self {
        Self::Error(err)
    }
}

impl From<String> for ThrownValue {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for ThrownValue {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl Debug for ThrownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Self::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Self::Other(_) => f.write_str("Other(..)"),
        }
    }
}
