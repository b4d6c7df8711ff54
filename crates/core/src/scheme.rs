//! Registry of kinds keyed by group/version/kind.

use kube::core::GroupVersionKind;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::{List, ListObject};
use crate::metadata::{gvk_key, split_api_version};
use crate::object::{Kind, Object};

type NewFn = fn() -> Box<dyn Object>;
type DecodeFn = fn(Json) -> Result<Box<dyn Object>>;
type DecodeListFn = fn(Json) -> Result<Box<dyn ListObject>>;

#[derive(Clone, Copy)]
struct Registration {
    construct: NewFn,
    decode: DecodeFn,
}

fn new_object<K: Kind + Default>() -> Box<dyn Object> {
    let mut obj = K::default();
    *obj.types_mut() = Some(K::type_meta());
    Box::new(obj)
}

fn decode_object<K: Kind + DeserializeOwned>(raw: Json) -> Result<Box<dyn Object>> {
    let obj: K = serde_json::from_value(raw)?;
    Ok(Box::new(obj))
}

fn decode_list<K: Kind + DeserializeOwned>(raw: Json) -> Result<Box<dyn ListObject>> {
    let list: List<K> = serde_json::from_value(raw)?;
    Ok(Box::new(list))
}

/// Maps served kinds (and their `<Kind>List` kinds) to constructors and decoders.
#[derive(Default)]
pub struct Scheme {
    kinds: FxHashMap<String, Registration>,
    lists: FxHashMap<String, DecodeListFn>,
    order: Vec<GroupVersionKind>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `K` and its list kind. Registering the same kind twice is a no-op.
    pub fn register<K>(&mut self) -> &mut Self
    where
        K: Kind + Default + DeserializeOwned,
    {
        let gvk = K::group_version_kind();
        let key = gvk_key(&gvk.group, &gvk.version, &gvk.kind);
        if self.kinds.contains_key(&key) {
            return self;
        }
        let list_key = gvk_key(&gvk.group, &gvk.version, &format!("{}List", gvk.kind));
        debug!(kind = %key, list = %list_key, "registering kind");
        self.kinds.insert(key, Registration { construct: new_object::<K>, decode: decode_object::<K> });
        self.lists.insert(list_key, decode_list::<K>);
        self.order.push(gvk);
        self
    }

    pub fn is_registered(&self, gvk: &GroupVersionKind) -> bool {
        self.kinds.contains_key(&gvk_key(&gvk.group, &gvk.version, &gvk.kind))
    }

    /// Registered kinds sorted by group, version, kind.
    pub fn kinds(&self) -> Vec<GroupVersionKind> {
        let mut out = self.order.clone();
        out.sort_by(|a, b| a.group.cmp(&b.group).then(a.version.cmp(&b.version)).then(a.kind.cmp(&b.kind)));
        out
    }

    /// Empty object of the given kind with `apiVersion`/`kind` populated.
    pub fn new_object(&self, gvk: &GroupVersionKind) -> Result<Box<dyn Object>> {
        let key = gvk_key(&gvk.group, &gvk.version, &gvk.kind);
        let reg = self.kinds.get(&key).ok_or(Error::UnknownKind(key))?;
        Ok((reg.construct)())
    }

    /// Decode a single object, dispatching on its `apiVersion` and `kind`.
    pub fn decode(&self, raw: Json) -> Result<Box<dyn Object>> {
        let key = type_key(&raw)?;
        trace!(kind = %key, "decoding object");
        let reg = self.kinds.get(&key).ok_or(Error::UnknownKind(key))?;
        (reg.decode)(raw)
    }

    /// Decode a `<Kind>List` of a registered kind.
    pub fn decode_list(&self, raw: Json) -> Result<Box<dyn ListObject>> {
        let key = type_key(&raw)?;
        trace!(kind = %key, "decoding list");
        let decode = self.lists.get(&key).ok_or(Error::UnknownKind(key))?;
        decode(raw)
    }
}

fn type_key(raw: &Json) -> Result<String> {
    let api_version = raw.get("apiVersion").and_then(|v| v.as_str()).ok_or(Error::MissingTypeMeta)?;
    let kind = raw.get("kind").and_then(|v| v.as_str()).ok_or(Error::MissingTypeMeta)?;
    let (group, version) = split_api_version(api_version);
    Ok(gvk_key(group, version, kind))
}
