#![forbid(unsafe_code)]

use appsdk_core::{ListObject, Object};
use appsdk_playlist::v0alpha1::{Playlist, PlaylistList, PlaylistSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use proptest::prelude::*;

fn playlist(name: &str) -> Playlist {
    Playlist::new(name, PlaylistSpec { title: name.to_uppercase(), ..Default::default() })
}

fn names(list: &PlaylistList) -> Vec<String> {
    list.iter().map(|p| p.metadata.name.clone().unwrap_or_default()).collect()
}

#[test]
fn copy_is_independent_of_original() {
    let mut list = PlaylistList::new(vec![playlist("p1"), playlist("p2")]);
    list.metadata = ListMeta { resource_version: Some("100".to_string()), ..Default::default() };

    let mut copy = list.clone();
    copy.items[0].metadata.name = Some("changed".to_string());
    copy.metadata.resource_version = Some("101".to_string());

    assert_eq!(names(&list), vec!["p1", "p2"]);
    assert_eq!(list.metadata.resource_version.as_deref(), Some("100"));
    assert_eq!(copy.items.len(), 2);
}

#[test]
fn dyn_copy_is_independent_of_original() {
    let list = PlaylistList::new(vec![playlist("p1"), playlist("p2")]);
    let mut copy = list.deep_copy_object();
    copy.get_items()[0].object_meta_mut().name = Some("changed".to_string());

    assert_eq!(names(&list), vec!["p1", "p2"]);
    assert_eq!(copy.len(), 2);
    let copied = copy.downcast_ref::<Playlist>().unwrap();
    assert_eq!(names(copied), vec!["changed", "p2"]);
}

#[test]
fn get_items_mutates_backing_storage() {
    let mut list = PlaylistList::new(vec![playlist("p1"), playlist("p2")]);
    for item in list.get_items() {
        item.set_spec(Box::new(PlaylistSpec { title: "same".to_string(), ..Default::default() })).unwrap();
    }
    assert!(list.iter().all(|p| p.spec.title == "same"));
}

#[test]
fn set_items_replaces_contents() {
    let mut list = PlaylistList::new(vec![playlist("p1")]);
    let items: Vec<Box<dyn Object>> = vec![Box::new(playlist("a")), Box::new(playlist("b")), Box::new(playlist("c"))];
    list.set_items(items).unwrap();
    assert_eq!(names(&list), vec!["a", "b", "c"]);

    list.set_items(Vec::new()).unwrap();
    assert!(ListObject::is_empty(&list));
}

proptest! {
    #[test]
    fn get_items_preserves_length_and_order(raw in prop::collection::vec("[a-z]{1,8}", 0..16)) {
        let mut list = PlaylistList::new(raw.iter().map(|n| playlist(n)).collect());
        let handles: Vec<String> = list.get_items().iter().map(|o| o.static_metadata().name).collect();
        prop_assert_eq!(handles.len(), raw.len());
        prop_assert_eq!(handles, raw);
    }
}
