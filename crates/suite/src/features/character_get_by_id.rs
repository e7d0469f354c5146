use crate::scenario::Scenario;
use crate::steps::{CharacterCheck, CharacterRef, CommonStep, GetStep};

pub const FEATURE: &str = "character-get-by-id";

pub const NOT_FOUND_MESSAGE: &str = "Character not found";

/// Well-formed id that no created character receives.
const UNKNOWN_ID: &str = "char_000000000000";

pub fn scenarios() -> Vec<Scenario> {
    let checks = [
        CharacterCheck::ValidId,
        CharacterCheck::Name,
        CharacterCheck::ValidStatus,
        CharacterCheck::Categories,
        CharacterCheck::EachCategoryValid,
        CharacterCheck::Identity,
        CharacterCheck::Inspirations,
        CharacterCheck::NotesValidIfPresent,
    ];

    let mut existing = Scenario::new(FEATURE, "Get an existing character by id")
        .given(CommonStep::ExistingCharacter)
        .when(GetStep::Request(CharacterRef::Existing))
        .then(GetStep::ExpectReturned);
    for check in checks {
        existing = existing.then(GetStep::Check(check));
    }
    let existing = existing.then(GetStep::ExpectMatchesDatabase);

    vec![
        existing,
        Scenario::new(FEATURE, "Get a non-existent character")
            .given(CommonStep::ServiceAvailable)
            .when(GetStep::Request(CharacterRef::NonExistent))
            .then(CommonStep::ExpectStatus(404))
            .then(CommonStep::ExpectErrorMessage(NOT_FOUND_MESSAGE.to_string())),
        Scenario::new(FEATURE, "Get a character by an unknown literal id")
            .given(CommonStep::ServiceAvailable)
            .when(GetStep::Request(CharacterRef::Literal(UNKNOWN_ID.to_string())))
            .then(CommonStep::ExpectStatus(404))
            .then(CommonStep::ExpectErrorMessage(NOT_FOUND_MESSAGE.to_string())),
    ]
}
