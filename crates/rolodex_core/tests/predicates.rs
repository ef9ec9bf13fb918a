use rolodex_core::{
    Address, Email, KeywordsPredicate, Name, Person, PersonAttribute, PersonFilter,
    PersonPredicate, Phone, Tag,
};
use std::collections::BTreeSet;

fn person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(email).unwrap(),
        Address::new(address).unwrap(),
        tags.iter().map(|tag| Tag::new(*tag).unwrap()).collect::<BTreeSet<_>>(),
    )
}

fn alice() -> Person {
    person(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123 Clementi Street, #08-111",
        &["friends"],
    )
}

fn keywords(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn empty_keyword_list_matches_nobody() {
    let subject = alice();
    for attribute in [
        PersonAttribute::Name,
        PersonAttribute::Phone,
        PersonAttribute::Email,
        PersonAttribute::Address,
        PersonAttribute::Tag,
    ] {
        let predicate = KeywordsPredicate::new(attribute, Vec::new());
        assert!(!predicate.test(&subject), "{attribute:?} matched with no keywords");
    }
}

#[test]
fn address_match_is_case_insensitive_substring() {
    let subject = alice();
    assert!(KeywordsPredicate::address(keywords(&["ST"])).test(&subject));
    assert!(KeywordsPredicate::address(keywords(&["clem"])).test(&subject));
    assert!(!KeywordsPredicate::address(keywords(&["zz"])).test(&subject));
}

#[test]
fn any_keyword_is_enough() {
    let subject = alice();
    assert!(KeywordsPredicate::name(keywords(&["bob", "paul"])).test(&subject));
    assert!(!KeywordsPredicate::name(keywords(&["bob", "carol"])).test(&subject));
}

#[test]
fn keyword_order_does_not_change_outcome() {
    let subject = alice();
    let forward = KeywordsPredicate::address(keywords(&["zz", "street"]));
    let backward = KeywordsPredicate::address(keywords(&["street", "zz"]));
    assert_eq!(forward.test(&subject), backward.test(&subject));
    assert_ne!(forward, backward);
}

#[test]
fn regex_special_characters_are_literal() {
    let subject = alice();
    assert!(KeywordsPredicate::address(keywords(&["#08-111"])).test(&subject));
    assert!(!KeywordsPredicate::address(keywords(&["1.3"])).test(&subject));
    assert!(!KeywordsPredicate::name(keywords(&["a.*e"])).test(&subject));
}

#[test]
fn each_attribute_reads_its_own_field() {
    let subject = alice();
    assert!(KeywordsPredicate::phone(keywords(&["4351"])).test(&subject));
    assert!(KeywordsPredicate::email(keywords(&["EXAMPLE.com"])).test(&subject));
    assert!(KeywordsPredicate::tag(keywords(&["friend"])).test(&subject));

    assert!(!KeywordsPredicate::name(keywords(&["clementi"])).test(&subject));
    assert!(!KeywordsPredicate::address(keywords(&["alice"])).test(&subject));
    assert!(!KeywordsPredicate::tag(keywords(&["family"])).test(&subject));
}

#[test]
fn equality_is_structural_over_attribute_and_keywords() {
    let first = KeywordsPredicate::address(keywords(&["first", "second"]));
    assert_eq!(first, KeywordsPredicate::address(keywords(&["first", "second"])));
    assert_ne!(first, KeywordsPredicate::address(keywords(&["first"])));
    assert_ne!(first, KeywordsPredicate::name(keywords(&["first", "second"])));
}

#[test]
fn display_is_structural() {
    let predicate = KeywordsPredicate::address(keywords(&["street", "avenue"]));
    assert_eq!(
        predicate.to_string(),
        "KeywordsPredicate{attribute=address, keywords=[street, avenue]}"
    );
}

#[test]
fn filter_all_shows_everyone() {
    let subject = alice();
    assert!(PersonFilter::All.test(&subject));
    assert!(PersonFilter::default().test(&subject));

    let none: PersonFilter = KeywordsPredicate::name(Vec::new()).into();
    assert!(!none.test(&subject));
}
