//! List wrappers.

use std::any::{type_name, Any};
use std::fmt;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::core::TypeMeta;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::object::{Kind, Object};

/// A list of `T` with inline type information and a list header.
///
/// `T` is usually a [`Kind`], which makes the list a [`ListObject`]; plain
/// records can be wrapped as data only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { types: None, metadata: ListMeta::default(), items: Vec::new() }
    }
}

impl<T> List<T> {
    pub fn with_types(types: TypeMeta, items: Vec<T>) -> Self {
        Self { types: Some(types), metadata: ListMeta::default(), items }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<K: Kind> List<K> {
    /// List of `K` typed as `<Kind>List` in the kind's group and version.
    pub fn new(items: Vec<K>) -> Self {
        Self::with_types(Self::list_type_meta(), items)
    }

    pub fn list_type_meta() -> TypeMeta {
        let item = K::type_meta();
        TypeMeta { api_version: item.api_version, kind: format!("{}List", item.kind) }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Object-safe list contract over a homogeneous list of one kind.
pub trait ListObject: Any + fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn list_metadata(&self) -> &ListMeta;
    fn list_metadata_mut(&mut self) -> &mut ListMeta;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles into the backing storage, in order.
    fn get_items(&mut self) -> Vec<&mut dyn Object>;

    /// Replace all items. Fails without modifying the list if any element is
    /// not of the list's kind.
    fn set_items(&mut self, items: Vec<Box<dyn Object>>) -> Result<()>;

    fn copy(&self) -> Box<dyn ListObject>;

    fn deep_copy_object(&self) -> Box<dyn ListObject> {
        self.copy()
    }
}

impl<K: Kind> ListObject for List<K> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn list_metadata(&self) -> &ListMeta {
        &self.metadata
    }

    fn list_metadata_mut(&mut self) -> &mut ListMeta {
        &mut self.metadata
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get_items(&mut self) -> Vec<&mut dyn Object> {
        self.items.iter_mut().map(|item| item as &mut dyn Object).collect()
    }

    fn set_items(&mut self, items: Vec<Box<dyn Object>>) -> Result<()> {
        let mut typed = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item.into_any().downcast::<K>() {
                Ok(item) => typed.push(*item),
                Err(_) => {
                    return Err(Error::TypeMismatch {
                        target: format!("items[{}]", index).into(),
                        expected: type_name::<K>(),
                    })
                }
            }
        }
        self.items = typed;
        Ok(())
    }

    fn copy(&self) -> Box<dyn ListObject> {
        Box::new(self.clone())
    }
}

impl dyn ListObject {
    pub fn downcast_ref<K: Kind>(&self) -> Option<&List<K>> {
        self.as_any().downcast_ref()
    }
}
