use std::any::{type_name, Any};
use std::borrow::Cow;

/// Errors surfaced by the object, list and scheme contracts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A setter received a value of the wrong concrete type. The target is unchanged.
    #[error("cannot set {target}: value is not of type {expected}")]
    TypeMismatch {
        target: Cow<'static, str>,
        expected: &'static str,
    },
    #[error("subresource '{0}' does not exist")]
    UnknownSubresource(String),
    #[error("no kind registered for {0}")]
    UnknownKind(String),
    #[error("object is missing apiVersion or kind")]
    MissingTypeMeta,
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Take ownership of a type-erased value if it is exactly `T`.
pub fn downcast_value<T: Any>(value: Box<dyn Any>, target: impl Into<Cow<'static, str>>) -> Result<T> {
    value
        .downcast::<T>()
        .map(|v| *v)
        .map_err(|_| Error::TypeMismatch { target: target.into(), expected: type_name::<T>() })
}
