use rolodex_core::{Relationship, RelationshipRecord, Tag};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeSet, HashSet};
use std::hash::{Hash, Hasher};

fn tags(names: &[&str]) -> BTreeSet<Tag> {
    names.iter().map(|name| Tag::new(*name).unwrap()).collect()
}

fn rel(first: &str, second: &str, forward: &str, reverse: &str, tag_names: &[&str]) -> Relationship {
    Relationship::new(first, second, forward, reverse, tags(tag_names)).unwrap()
}

fn hash_of(value: &Relationship) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn new_rejects_blank_or_whitespace_led_names() {
    for (forward, reverse) in [("", "child"), ("parent", ""), (" parent", "child"), ("parent", "\nchild")] {
        let err = Relationship::new("a", "b", forward, reverse, BTreeSet::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Relationship names can take any values, should not be blank, \
             and must start with a non-whitespace character"
        );
        assert_eq!(err.field, "relationship_name");
    }
}

#[test]
fn fully_swapped_construction_is_the_same_relationship() {
    let original = rel("a", "b", "parent", "child", &["family"]);
    let swapped = rel("b", "a", "child", "parent", &["family"]);

    assert!(original.is_same_relationship(&swapped));
    assert!(swapped.is_same_relationship(&original));
    assert_eq!(original, swapped);
    assert_eq!(hash_of(&original), hash_of(&swapped));
}

#[test]
fn partial_swap_is_a_different_relationship() {
    let original = rel("a", "b", "parent", "child", &[]);
    let ids_only = rel("b", "a", "parent", "child", &[]);

    assert!(!original.is_same_relationship(&ids_only));
    assert_ne!(original, ids_only);
}

#[test]
fn partial_swap_with_symmetric_names_is_the_same_relationship() {
    let original = rel("a", "b", "friend", "friend", &[]);
    let ids_only = rel("b", "a", "friend", "friend", &[]);

    assert!(original.is_same_relationship(&ids_only));
    assert_eq!(hash_of(&original), hash_of(&ids_only));
}

#[test]
fn equality_requires_equal_tags_but_identity_does_not() {
    let plain = rel("a", "b", "parent", "child", &[]);
    let tagged = rel("a", "b", "parent", "child", &["family"]);

    assert!(plain.is_same_relationship(&tagged));
    assert_ne!(plain, tagged);
}

#[test]
fn hash_set_deduplicates_swapped_equal_relationships() {
    let mut set = HashSet::new();
    set.insert(rel("zoe", "adam", "boss", "employee", &["work"]));
    set.insert(rel("adam", "zoe", "employee", "boss", &["work"]));
    set.insert(rel("adam", "zoe", "boss", "employee", &["work"]));
    assert_eq!(set.len(), 2);
}

#[test]
fn name_from_perspective_resolves_each_endpoint() {
    let relationship = rel("a", "b", "parent", "child", &[]);

    assert_eq!(relationship.name_from_perspective("a").unwrap(), "parent");
    assert_eq!(relationship.name_from_perspective("b").unwrap(), "child");

    let err = relationship.name_from_perspective("c").unwrap_err();
    assert_eq!(err.user_id, "c");
    assert!(err
        .to_string()
        .contains("User ID does not match either end of the relationship"));
}

#[test]
fn involves_user_checks_both_endpoints() {
    let relationship = rel("a", "b", "parent", "child", &[]);
    assert!(relationship.involves_user("a"));
    assert!(relationship.involves_user("b"));
    assert!(!relationship.involves_user("c"));
    assert_eq!(relationship.other_user_id("a"), Some("b"));
    assert_eq!(relationship.other_user_id("c"), None);
}

#[test]
fn lookup_by_ids_and_name_accepts_either_name_in_either_order() {
    let relationship = rel("a", "b", "parent", "child", &[]);

    assert!(relationship.is_same_relationship_between("a", "b", "parent"));
    assert!(relationship.is_same_relationship_between("a", "b", "child"));
    assert!(relationship.is_same_relationship_between("b", "a", "parent"));
    assert!(relationship.is_same_relationship_between("b", "a", "child"));

    assert!(!relationship.is_same_relationship_between("a", "b", "sibling"));
    assert!(!relationship.is_same_relationship_between("a", "c", "parent"));
    assert!(!relationship.is_same_relationship_between("a", "a", "parent"));
}

#[test]
fn tag_round_trip_restores_original() {
    let original = rel("a", "b", "parent", "child", &["family"]);
    let extra = Tag::new("close").unwrap();

    let added = original.with_added_tag(extra.clone());
    assert!(added.tags().contains(&extra));
    assert_eq!(original.tags().len(), 1);

    let removed = added.with_removed_tag(&extra);
    assert_eq!(removed, original);
}

#[test]
fn removing_absent_tag_is_a_no_op() {
    let original = rel("a", "b", "parent", "child", &["family"]);
    let absent = Tag::new("work").unwrap();
    assert_eq!(original.with_removed_tag(&absent), original);
}

#[test]
fn display_lists_names_endpoints_and_tags() {
    let plain = rel("a", "b", "parent", "child", &[]);
    assert_eq!(plain.to_string(), "[Forward: parent, Reverse: child] Between: a and b");

    let tagged = rel("a", "b", "parent", "child", &["close", "family"]);
    assert_eq!(
        tagged.to_string(),
        "[Forward: parent, Reverse: child] Between: a and b Tags: [close][family]"
    );
}

#[test]
fn serialization_uses_plain_record_fields() {
    let relationship = rel("a", "b", "parent", "child", &["family"]);

    let json = serde_json::to_value(&relationship).unwrap();
    assert_eq!(json["first_user_id"], "a");
    assert_eq!(json["second_user_id"], "b");
    assert_eq!(json["forward_name"], "parent");
    assert_eq!(json["reverse_name"], "child");
    assert_eq!(json["tags"], serde_json::json!(["family"]));

    let record: RelationshipRecord = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(record.tags, vec![Tag::new("family").unwrap()]);

    let decoded: Relationship = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, relationship);
}

#[test]
fn deserialize_rejects_invalid_names_and_tags() {
    let blank_name = serde_json::json!({
        "first_user_id": "a",
        "second_user_id": "b",
        "forward_name": " ",
        "reverse_name": "child",
        "tags": []
    });
    let err = serde_json::from_value::<Relationship>(blank_name).unwrap_err();
    assert!(err.to_string().contains("must start with a non-whitespace character"));

    let bad_tag = serde_json::json!({
        "first_user_id": "a",
        "second_user_id": "b",
        "forward_name": "parent",
        "reverse_name": "child",
        "tags": ["best friend"]
    });
    assert!(serde_json::from_value::<Relationship>(bad_tag).is_err());
}
