//! Resource object contract shared by the typed API kinds.
//!
//! Kinds implement [`Kind`] on top of `kube::Resource`; everything else
//! (type-erased [`Object`] access, metadata projection, lists, the
//! [`Scheme`] registry) is provided here once for all of them.

#![forbid(unsafe_code)]

pub mod audit;
mod error;
mod list;
mod metadata;
mod object;
mod scheme;

pub use audit::AuditExt;
pub use error::{downcast_value, Error, Result};
pub use list::{List, ListObject};
pub use metadata::{gvk_key, CommonMetadata, ExtraFields, StaticMetadata};
pub use object::{Kind, Object};
pub use scheme::Scheme;

pub mod prelude {
    pub use super::{
        AuditExt, CommonMetadata, Error, ExtraFields, Kind, List, ListObject, Object, Result, Scheme,
        StaticMetadata,
    };
}

#[cfg(test)]
pub(crate) mod testing;
