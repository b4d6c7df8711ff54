//! Typed and type-erased object contracts.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::{GroupVersionKind, TypeMeta};
use kube::Resource;

use crate::error::{downcast_value, Error, Result};
use crate::metadata::{gvk_of, CommonMetadata, StaticMetadata};

/// A concrete resource kind with a typed spec.
///
/// Type identity (group, version, kind, plural) comes from `kube::Resource`.
/// Kinds with subresources list them in [`Kind::SUBRESOURCES`] and route
/// them with a `match` in [`Kind::subresource`] / [`Kind::replace_subresource`].
pub trait Kind: Resource<DynamicType = ()> + Clone + fmt::Debug + Send + Sync + 'static {
    type Spec: Clone + fmt::Debug + Send + Sync + 'static;

    const SUBRESOURCES: &'static [&'static str] = &[];

    /// Inline `apiVersion`/`kind`, absent when the object was built without them.
    fn types(&self) -> Option<&TypeMeta>;
    fn types_mut(&mut self) -> &mut Option<TypeMeta>;

    fn spec(&self) -> &Self::Spec;
    fn spec_mut(&mut self) -> &mut Self::Spec;

    fn subresource(&self, _name: &str) -> Option<&dyn Any> {
        None
    }

    /// Replace a named subresource; the value must have the subresource's exact type.
    fn replace_subresource(&mut self, name: &str, _value: Box<dyn Any>) -> Result<()> {
        Err(Error::UnknownSubresource(name.to_string()))
    }

    fn group_version_kind() -> GroupVersionKind {
        GroupVersionKind::gvk(&Self::group(&()), &Self::version(&()), &Self::kind(&()))
    }

    fn type_meta() -> TypeMeta {
        TypeMeta { api_version: Self::api_version(&()).into_owned(), kind: Self::kind(&()).into_owned() }
    }
}

/// Object-safe view of any [`Kind`], for code that handles heterogeneous objects.
pub trait Object: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn object_meta(&self) -> &ObjectMeta;
    fn object_meta_mut(&mut self) -> &mut ObjectMeta;

    fn get_spec(&self) -> &dyn Any;
    /// Fails with [`Error::TypeMismatch`] unless `spec` is exactly the kind's spec type.
    fn set_spec(&mut self, spec: Box<dyn Any>) -> Result<()>;

    fn get_subresources(&self) -> BTreeMap<&'static str, &dyn Any>;
    fn get_subresource(&self, name: &str) -> Option<&dyn Any>;
    fn set_subresource(&mut self, name: &str, value: Box<dyn Any>) -> Result<()>;

    fn static_metadata(&self) -> StaticMetadata;
    fn set_static_metadata(&mut self, metadata: StaticMetadata);

    fn common_metadata(&self) -> CommonMetadata;
    fn set_common_metadata(&mut self, metadata: CommonMetadata);

    /// Deep, independent duplicate.
    fn copy(&self) -> Box<dyn Object>;

    fn deep_copy_object(&self) -> Box<dyn Object> {
        self.copy()
    }
}

impl<K: Kind> Object for K {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn object_meta(&self) -> &ObjectMeta {
        self.meta()
    }

    fn object_meta_mut(&mut self) -> &mut ObjectMeta {
        self.meta_mut()
    }

    fn get_spec(&self) -> &dyn Any {
        self.spec()
    }

    fn set_spec(&mut self, spec: Box<dyn Any>) -> Result<()> {
        *self.spec_mut() = downcast_value::<K::Spec>(spec, "spec")?;
        Ok(())
    }

    fn get_subresources(&self) -> BTreeMap<&'static str, &dyn Any> {
        K::SUBRESOURCES
            .iter()
            .filter_map(|name| self.subresource(name).map(|v| (*name, v)))
            .collect()
    }

    fn get_subresource(&self, name: &str) -> Option<&dyn Any> {
        self.subresource(name)
    }

    fn set_subresource(&mut self, name: &str, value: Box<dyn Any>) -> Result<()> {
        self.replace_subresource(name, value)
    }

    fn static_metadata(&self) -> StaticMetadata {
        let gvk = self.types().map(gvk_of).unwrap_or_else(K::group_version_kind);
        StaticMetadata::from_header(self.meta(), gvk)
    }

    fn set_static_metadata(&mut self, metadata: StaticMetadata) {
        *self.types_mut() = Some(metadata.type_meta());
        let meta = self.meta_mut();
        meta.name = Some(metadata.name).filter(|s| !s.is_empty());
        meta.namespace = Some(metadata.namespace).filter(|s| !s.is_empty());
    }

    fn common_metadata(&self) -> CommonMetadata {
        CommonMetadata::from_header(self.meta())
    }

    fn set_common_metadata(&mut self, metadata: CommonMetadata) {
        metadata.apply_to(self.meta_mut())
    }

    fn copy(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }
}

impl dyn Object {
    pub fn is<K: Kind>(&self) -> bool {
        self.as_any().is::<K>()
    }

    pub fn downcast_ref<K: Kind>(&self) -> Option<&K> {
        self.as_any().downcast_ref()
    }

    pub fn downcast_mut<K: Kind>(&mut self) -> Option<&mut K> {
        self.as_any_mut().downcast_mut()
    }
}
