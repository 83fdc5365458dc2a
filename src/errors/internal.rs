use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared handle to the server-side error behind an HTTP error.
///
/// Clones point at the same error; equality is identity.
#[derive(Clone)]
pub struct InternalCause(Arc<dyn Error + Send + Sync + 'static>);

impl InternalCause {
    /// Wrap an error as an internal cause
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Create from an already boxed error
    pub fn from_boxed(err: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self(Arc::from(err))
    }

    /// Create from an `anyhow::Error`, keeping its message
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        Self::from_boxed(err.into())
    }

    /// Borrow the underlying error
    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// The error this cause wraps, one level down
    pub fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }

    /// Whether both handles point at the same error
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for InternalCause
where
    E: Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl fmt::Display for InternalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for InternalCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for InternalCause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Serialize for InternalCause {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
