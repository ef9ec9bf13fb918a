//! Sample address book used to seed a fresh install and smoke runs.

use crate::model::event::Event;
use crate::model::person::{Address, Email, Name, Person, Phone};
use crate::model::relationship::Relationship;
use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use crate::repo::address_book::{AddressBook, BookError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error raised when the bundled sample data is internally inconsistent.
#[derive(Debug)]
pub enum SampleDataError {
    Validation(ValidationError),
    Book(BookError),
}

impl Display for SampleDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid sample value: {err}"),
            Self::Book(err) => write!(f, "invalid sample book: {err}"),
        }
    }
}

impl Error for SampleDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Book(err) => Some(err),
        }
    }
}

impl From<ValidationError> for SampleDataError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BookError> for SampleDataError {
    fn from(value: BookError) -> Self {
        Self::Book(value)
    }
}

const SAMPLE_PERSONS: &[(&str, &str, &str, &str, &str, &[&str])] = &[
    (
        "alex",
        "Alex Yeoh",
        "87438807",
        "alexyeoh@example.com",
        "Blk 30 Geylang Street 29, #06-40",
        &["friends"],
    ),
    (
        "bernice",
        "Bernice Yu",
        "99272758",
        "berniceyu@example.com",
        "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        &["colleagues", "friends"],
    ),
    (
        "charlotte",
        "Charlotte Oliveiro",
        "93210283",
        "charlotte@example.com",
        "Blk 11 Ang Mo Kio Street 74, #11-04",
        &["neighbours"],
    ),
    (
        "david",
        "David Li",
        "91031282",
        "lidavid@example.com",
        "Blk 436 Serangoon Gardens Street 26, #16-43",
        &["family"],
    ),
    (
        "irfan",
        "Irfan Ibrahim",
        "92492021",
        "irfan@example.com",
        "Blk 47 Tampines Street 20, #17-35",
        &["classmates"],
    ),
    (
        "roy",
        "Roy Balakrishnan",
        "92624417",
        "royb@example.com",
        "Blk 45 Aljunied Street 85, #11-31",
        &["colleagues"],
    ),
];

/// Builds the bundled sample book: six persons, two relationships, one event.
pub fn sample_address_book() -> Result<AddressBook, SampleDataError> {
    let mut book = AddressBook::new();
    for (id, name, phone, email, address, tags) in SAMPLE_PERSONS {
        book.add_person(Person::with_id(
            *id,
            Name::new(*name)?,
            Phone::new(*phone)?,
            Email::new(*email)?,
            Address::new(*address)?,
            tag_set(tags)?,
        )?)?;
    }

    book.add_relationship(Relationship::new(
        "alex",
        "bernice",
        "colleague",
        "colleague",
        tag_set(&["work"])?,
    )?)?;
    book.add_relationship(Relationship::new(
        "david",
        "irfan",
        "mentor",
        "mentee",
        BTreeSet::new(),
    )?)?;

    let reunion = Event::new(
        "Class reunion",
        1_767_225_600_000,
        Some("Clementi Ave 2".to_string()),
        None,
        tag_set(&["classmates"])?,
    )?;
    book.add_event(reunion.clone())?;
    book.add_contact_to_event(&reunion, "irfan")?;

    Ok(book)
}

fn tag_set(names: &[&str]) -> Result<BTreeSet<Tag>, ValidationError> {
    names.iter().map(|name| Tag::new(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::sample_address_book;

    #[test]
    fn sample_book_is_consistent() {
        let book = sample_address_book().expect("sample data should be valid");
        assert_eq!(book.persons().len(), 6);
        assert_eq!(book.relationships().len(), 2);
        assert_eq!(book.events().len(), 1);
        assert_eq!(book.events()[0].contacts(), ["irfan".to_string()]);
    }
}
