use core::fmt;
use std::error::Error;

use super::AnnotatedError;

impl fmt::Display for AnnotatedError {
    /// Renders the cause's own message, untouched.
    ///
    /// Field values never appear here. A message that interpolated them would
    /// have its cardinality multiplied by the value space of every field;
    /// keeping the template fixed bounds it to the number of distinct causes.
    /// Only a causeless root annotation falls back to rendering the map.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cause() {
            Some(cause) => fmt::Display::fmt(cause, f),
            None => write!(f, "{:?}", &*self.read_fields()),
        }
    }
}

impl fmt::Debug for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedError")
            .field("cause", &self.cause())
            .field("fields", &*self.read_fields())
            .finish()
    }
}

impl Error for AnnotatedError {
    /// Exposes the owned cause so standard chain walking passes through this
    /// wrapper like any other link.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}
