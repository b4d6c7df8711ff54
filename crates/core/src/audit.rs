//! Audit fields persisted as annotations on the object header.
//!
//! `createdBy`, `updatedBy` and `updateTimestamp` live under the reserved
//! `grafana.com/` annotation namespace. Setters allocate the annotation map
//! on demand; getters never fail and report absent or malformed values as
//! empty.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Resource;

pub const CREATED_BY: &str = "grafana.com/createdBy";
pub const UPDATED_BY: &str = "grafana.com/updatedBy";
pub const UPDATE_TIMESTAMP: &str = "grafana.com/updateTimestamp";

fn annotation<'a>(meta: &'a ObjectMeta, key: &str) -> Option<&'a str> {
    meta.annotations.as_ref()?.get(key).map(String::as_str)
}

fn annotations_mut(meta: &mut ObjectMeta) -> &mut BTreeMap<String, String> {
    meta.annotations.get_or_insert_with(BTreeMap::new)
}

pub fn created_by(meta: &ObjectMeta) -> &str {
    annotation(meta, CREATED_BY).unwrap_or_default()
}

pub fn set_created_by(meta: &mut ObjectMeta, created_by: &str) {
    annotations_mut(meta).insert(CREATED_BY.to_string(), created_by.to_string());
}

pub fn updated_by(meta: &ObjectMeta) -> &str {
    annotation(meta, UPDATED_BY).unwrap_or_default()
}

pub fn set_updated_by(meta: &mut ObjectMeta, updated_by: &str) {
    annotations_mut(meta).insert(UPDATED_BY.to_string(), updated_by.to_string());
}

/// Parsed `grafana.com/updateTimestamp`, or `None` when absent or not RFC 3339.
#[cfg(not(feature = "legacy-update-timestamp"))]
pub fn update_timestamp(meta: &ObjectMeta) -> Option<DateTime<Utc>> {
    annotation(meta, UPDATE_TIMESTAMP)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|ts| ts.with_timezone(&Utc))
}

/// Older generated accessors swapped layout and value when parsing, so the
/// stored timestamp never read back. Kept for callers that depend on that.
#[cfg(feature = "legacy-update-timestamp")]
pub fn update_timestamp(_meta: &ObjectMeta) -> Option<DateTime<Utc>> {
    None
}

/// Stores the instant as RFC 3339 with second precision and a `Z` suffix.
pub fn set_update_timestamp(meta: &mut ObjectMeta, update_timestamp: DateTime<Utc>) {
    let raw = update_timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);
    annotations_mut(meta).insert(UPDATE_TIMESTAMP.to_string(), raw);
}

/// Audit accessors for any resource, in the style of `kube::ResourceExt`.
pub trait AuditExt: Resource {
    fn created_by(&self) -> &str {
        created_by(self.meta())
    }

    fn set_created_by(&mut self, created_by: &str) {
        set_created_by(self.meta_mut(), created_by)
    }

    fn updated_by(&self) -> &str {
        updated_by(self.meta())
    }

    fn set_updated_by(&mut self, updated_by: &str) {
        set_updated_by(self.meta_mut(), updated_by)
    }

    fn update_timestamp(&self) -> Option<DateTime<Utc>> {
        update_timestamp(self.meta())
    }

    fn set_update_timestamp(&mut self, update_timestamp: DateTime<Utc>) {
        set_update_timestamp(self.meta_mut(), update_timestamp)
    }
}

impl<K: Resource> AuditExt for K {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    #[test]
    fn getters_on_missing_annotations_are_empty() {
        let meta = ObjectMeta::default();
        assert_eq!(created_by(&meta), "");
        assert_eq!(updated_by(&meta), "");
        assert_eq!(update_timestamp(&meta), None);
        assert!(meta.annotations.is_none());
    }

    #[test]
    fn setters_materialize_annotation_map() {
        let mut meta = ObjectMeta::default();
        set_created_by(&mut meta, "alice");
        set_updated_by(&mut meta, "bob");
        let annos = meta.annotations.as_ref().unwrap();
        assert_eq!(annos.get(CREATED_BY).map(String::as_str), Some("alice"));
        assert_eq!(annos.get(UPDATED_BY).map(String::as_str), Some("bob"));
        assert_eq!(created_by(&meta), "alice");
        assert_eq!(updated_by(&meta), "bob");
    }

    #[test]
    fn getters_leave_missing_annotations_absent() {
        let meta = ObjectMeta::default();
        assert_eq!(created_by(&meta), "");
        assert_eq!(updated_by(&meta), "");
        assert_eq!(update_timestamp(&meta), None);
        assert!(meta.annotations.is_none());
    }

    #[test]
    fn setters_overwrite() {
        let mut meta = ObjectMeta::default();
        set_updated_by(&mut meta, "bob");
        set_updated_by(&mut meta, "carol");
        assert_eq!(updated_by(&meta), "carol");
    }

    #[test]
    fn update_timestamp_is_stored_as_rfc3339() {
        let mut meta = ObjectMeta::default();
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        set_update_timestamp(&mut meta, ts);
        assert_eq!(
            meta.annotations.as_ref().unwrap().get(UPDATE_TIMESTAMP).map(String::as_str),
            Some("2024-01-02T03:04:05Z")
        );
    }

    #[cfg(not(feature = "legacy-update-timestamp"))]
    #[test]
    fn malformed_update_timestamp_reads_as_unset() {
        let mut meta = ObjectMeta::default();
        annotations_mut(&mut meta).insert(UPDATE_TIMESTAMP.to_string(), "yesterday".to_string());
        assert_eq!(update_timestamp(&meta), None);
    }

    #[cfg(not(feature = "legacy-update-timestamp"))]
    #[test]
    fn update_timestamp_accepts_offsets() {
        let mut meta = ObjectMeta::default();
        annotations_mut(&mut meta).insert(UPDATE_TIMESTAMP.to_string(), "2024-01-02T05:04:05+02:00".to_string());
        assert_eq!(update_timestamp(&meta), Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()));
    }

    #[cfg(feature = "legacy-update-timestamp")]
    #[test]
    fn legacy_update_timestamp_never_reads_back() {
        let mut meta = ObjectMeta::default();
        set_update_timestamp(&mut meta, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(update_timestamp(&meta), None);
    }

    #[cfg(not(feature = "legacy-update-timestamp"))]
    proptest! {
        #[test]
        fn update_timestamp_round_trips_at_second_precision(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
            let ts = Utc.timestamp_opt(secs, nanos).unwrap();
            let mut meta = ObjectMeta::default();
            set_update_timestamp(&mut meta, ts);
            let expected = Utc.timestamp_opt(secs, 0).unwrap();
            prop_assert_eq!(update_timestamp(&meta), Some(expected));
        }
    }
}
