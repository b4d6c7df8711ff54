//! Framework-agnostic views over the object header.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ManagedFieldsEntry, ObjectMeta, OwnerReference, Time};
use kube::core::{GroupVersionKind, TypeMeta};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::audit;

const ANNOTATIONS: &str = "annotations";
const MANAGED_FIELDS: &str = "managedFields";
const OWNER_REFERENCES: &str = "ownerReferences";

/// Stable registry key for a group/version/kind; core group omits the group segment.
pub fn gvk_key(group: &str, version: &str, kind: &str) -> String {
    if group.is_empty() {
        format!("{}/{}", version, kind)
    } else {
        format!("{}/{}/{}", group, version, kind)
    }
}

pub(crate) fn api_version(group: &str, version: &str) -> String {
    if group.is_empty() {
        version.to_string()
    } else {
        format!("{}/{}", group, version)
    }
}

pub(crate) fn split_api_version(api_version: &str) -> (&str, &str) {
    api_version.split_once('/').unwrap_or(("", api_version))
}

pub(crate) fn gvk_of(types: &TypeMeta) -> GroupVersionKind {
    let (group, version) = split_api_version(&types.api_version);
    GroupVersionKind::gvk(group, version, &types.kind)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

/// Identity of a resource instance and its type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticMetadata {
    pub name: String,
    pub namespace: String,
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl StaticMetadata {
    pub fn api_version(&self) -> String {
        api_version(&self.group, &self.version)
    }

    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, &self.version, &self.kind)
    }

    pub fn type_meta(&self) -> TypeMeta {
        TypeMeta { api_version: self.api_version(), kind: self.kind.clone() }
    }

    pub(crate) fn from_header(meta: &ObjectMeta, gvk: GroupVersionKind) -> Self {
        Self {
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
            group: gvk.group,
            version: gvk.version,
            kind: gvk.kind,
        }
    }
}

/// Header fields that older callers pass outside the structured view.
///
/// On the wire this is an open `string -> any` map; members whose value does
/// not decode into the expected type are dropped individually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ExtraFields {
    pub annotations: Option<BTreeMap<String, String>>,
    pub managed_fields: Option<Vec<ManagedFieldsEntry>>,
    pub owner_references: Option<Vec<OwnerReference>>,
}

fn take_field<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> Option<T> {
    let raw = map.remove(key)?;
    match serde_json::from_value(raw) {
        Ok(v) => Some(v),
        Err(err) => {
            debug!(key, error = %err, "skipping legacy extra field with unexpected type");
            None
        }
    }
}

fn put_field<T: Serialize>(map: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(v) = value.and_then(|v| serde_json::to_value(v).ok()) {
        map.insert(key.to_string(), v);
    }
}

impl From<Map<String, Value>> for ExtraFields {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            annotations: take_field(&mut map, ANNOTATIONS),
            managed_fields: take_field(&mut map, MANAGED_FIELDS),
            owner_references: take_field(&mut map, OWNER_REFERENCES),
        }
    }
}

impl From<ExtraFields> for Map<String, Value> {
    fn from(extra: ExtraFields) -> Self {
        let mut map = Map::new();
        put_field(&mut map, ANNOTATIONS, extra.annotations);
        put_field(&mut map, MANAGED_FIELDS, extra.managed_fields);
        put_field(&mut map, OWNER_REFERENCES, extra.owner_references);
        map
    }
}

/// Snapshot of the mutable identity and audit fields of an object.
///
/// Zero values (`""`, `None`) for the audit fields mean "unspecified" when
/// the view is written back: the header keeps what it already holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonMetadata {
    pub uid: String,
    pub resource_version: String,
    pub generation: i64,
    pub labels: BTreeMap<String, String>,
    pub creation_timestamp: DateTime<Utc>,
    pub deletion_timestamp: Option<DateTime<Utc>>,
    pub finalizers: Vec<String>,
    pub update_timestamp: Option<DateTime<Utc>>,
    pub created_by: String,
    pub updated_by: String,
    pub extra_fields: Option<ExtraFields>,
}

impl CommonMetadata {
    /// Project a header into the view.
    pub fn from_header(meta: &ObjectMeta) -> Self {
        Self {
            uid: meta.uid.clone().unwrap_or_default(),
            resource_version: meta.resource_version.clone().unwrap_or_default(),
            generation: meta.generation.unwrap_or_default(),
            labels: meta.labels.clone().unwrap_or_default(),
            creation_timestamp: meta.creation_timestamp.as_ref().map(|t| t.0).unwrap_or_default(),
            deletion_timestamp: meta.deletion_timestamp.as_ref().map(|t| t.0),
            finalizers: meta.finalizers.clone().unwrap_or_default(),
            update_timestamp: audit::update_timestamp(meta),
            created_by: audit::created_by(meta).to_string(),
            updated_by: audit::updated_by(meta).to_string(),
            extra_fields: Some(ExtraFields {
                annotations: meta.annotations.clone(),
                managed_fields: meta.managed_fields.clone(),
                owner_references: meta.owner_references.clone(),
            }),
        }
    }

    /// Write the view into a header.
    ///
    /// Structured fields are assigned directly (empty clears). The creation
    /// timestamp is written unless it is the zero instant. Legacy extra fields,
    /// when present, replace their header fields; audit fields that are set are
    /// written on top of the resulting annotations.
    pub fn apply_to(self, meta: &mut ObjectMeta) {
        meta.uid = non_empty(self.uid);
        meta.resource_version = non_empty(self.resource_version);
        meta.generation = (self.generation != 0).then_some(self.generation);
        meta.labels = (!self.labels.is_empty()).then_some(self.labels);
        meta.creation_timestamp =
            (self.creation_timestamp != DateTime::<Utc>::default()).then_some(Time(self.creation_timestamp));
        meta.deletion_timestamp = self.deletion_timestamp.map(Time);
        meta.finalizers = (!self.finalizers.is_empty()).then_some(self.finalizers);

        if let Some(extra) = self.extra_fields {
            if let Some(annotations) = extra.annotations {
                meta.annotations = Some(annotations);
            }
            if let Some(managed_fields) = extra.managed_fields {
                meta.managed_fields = Some(managed_fields);
            }
            if let Some(owner_references) = extra.owner_references {
                meta.owner_references = Some(owner_references);
            }
        }

        meta.annotations.get_or_insert_with(BTreeMap::new);
        if let Some(ts) = self.update_timestamp {
            audit::set_update_timestamp(meta, ts);
        }
        if !self.created_by.is_empty() {
            audit::set_created_by(meta, &self.created_by);
        }
        if !self.updated_by.is_empty() {
            audit::set_updated_by(meta, &self.updated_by);
        }
    }
}
