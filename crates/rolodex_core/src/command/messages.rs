//! User-facing command feedback strings.

pub const MESSAGE_LISTED_ALL_PERSONS: &str = "Listed all persons";
pub const MESSAGE_UNKNOWN_USERS: &str = "One or both users do not exist";
pub const MESSAGE_RELATIONSHIP_NOT_FOUND: &str = "Relationship not found";

/// Overview line after a filter is installed, e.g. `2 persons listed!`.
pub fn persons_listed(count: usize) -> String {
    format!("{count} persons listed!")
}

pub fn person_added(person: impl std::fmt::Display) -> String {
    format!("New person added: {person}")
}

pub fn person_deleted(person: impl std::fmt::Display) -> String {
    format!("Deleted Person: {person}")
}

pub fn person_edited(person: impl std::fmt::Display) -> String {
    format!("Edited Person: {person}")
}

pub fn relationship_added(relationship: impl std::fmt::Display) -> String {
    format!("Relationship added: {relationship}")
}

pub fn relationship_deleted(relationship: impl std::fmt::Display) -> String {
    format!("Relationship deleted: {relationship}")
}

pub fn relationship_tagged(relationship: impl std::fmt::Display) -> String {
    format!("Relationship updated: {relationship}")
}

pub fn event_added(event: impl std::fmt::Display) -> String {
    format!("New event added: {event}")
}

pub fn contacts_not_added(ids: &[&str]) -> String {
    format!("Could not add contacts: {}", ids.join(", "))
}

pub fn no_relationships(person_id: &str) -> String {
    format!("No relationships found for {person_id}")
}

#[cfg(test)]
mod tests {
    use super::{contacts_not_added, persons_listed};

    #[test]
    fn persons_listed_embeds_count() {
        assert_eq!(persons_listed(0), "0 persons listed!");
        assert_eq!(persons_listed(7), "7 persons listed!");
    }

    #[test]
    fn contacts_not_added_joins_ids() {
        assert_eq!(contacts_not_added(&["a", "b"]), "Could not add contacts: a, b");
    }
}
