use forge_core::invalid_value::ViolationKind;
use forge_core::payload::CharacterField;

use crate::features::character_create::INVALID_INSPIRATION_ITEMS;
use crate::features::character_get_by_id::NOT_FOUND_MESSAGE;
use crate::scenario::Scenario;
use crate::steps::{CommonStep, UpdateStep, UpdateVariant};

pub const FEATURE: &str = "character-update";

/// Violations each field is sent with on update. A PATCH body simply
/// omits fields it does not change, so `missing` is never a violation here.
pub fn invalid_examples() -> Vec<(CharacterField, Vec<ViolationKind>)> {
    use ViolationKind as V;

    let string_field = vec![
        V::Empty,
        V::Spaces,
        V::Null,
        V::BooleanFalse,
        V::BooleanTrue,
        V::Number,
        V::Array,
    ];
    let array_field = vec![
        V::Empty,
        V::Spaces,
        V::Null,
        V::BooleanFalse,
        V::BooleanTrue,
        V::Number,
        V::String,
    ];

    vec![
        (CharacterField::Name, string_field.clone()),
        (CharacterField::Identity, string_field),
        (CharacterField::Categories, array_field.clone()),
        (CharacterField::Inspirations, array_field),
        (
            CharacterField::Notes,
            vec![V::Null, V::BooleanFalse, V::BooleanTrue, V::Number, V::Array],
        ),
    ]
}

fn update(name: impl Into<String>, step: UpdateStep) -> Scenario {
    Scenario::new(FEATURE, name)
        .given(CommonStep::ExistingCharacter)
        .when(step)
}

fn rejected(name: impl Into<String>, step: UpdateStep) -> Scenario {
    update(name, step).then(CommonStep::ExpectStatus(400))
}

fn accepted(name: &str, variant: UpdateVariant) -> Scenario {
    update(name, UpdateStep::Update(variant))
        .then(UpdateStep::ExpectUpdated)
        .then(UpdateStep::ExpectReflectsPayload)
        .then(UpdateStep::ExpectStored)
}

pub fn scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![
        accepted("Update multiple valid fields", UpdateVariant::MultipleFields),
        accepted("Update categories", UpdateVariant::Categories),
        accepted("Update inspirations", UpdateVariant::Inspirations),
        Scenario::new(FEATURE, "Update without an id")
            .given(CommonStep::ServiceAvailable)
            .when(UpdateStep::UpdateWithoutId)
            .then(CommonStep::ExpectStatus(404)),
        Scenario::new(FEATURE, "Update a non-existent character")
            .given(CommonStep::ServiceAvailable)
            .when(UpdateStep::UpdateNonExistent)
            .then(CommonStep::ExpectStatus(404))
            .then(CommonStep::ExpectErrorMessage(NOT_FOUND_MESSAGE.to_string())),
        rejected("Update the status field", UpdateStep::UpdateStatusField),
        rejected(
            "Update with an unknown category",
            UpdateStep::UpdateWithUnknownCategory("Villano".to_string()),
        ),
        rejected(
            "Update with duplicated categories",
            UpdateStep::UpdateWithDuplicateCategories,
        ),
        rejected("Update with an empty body", UpdateStep::UpdateWithEmptyBody),
        update("Update with a name that already exists", UpdateStep::UpdateWithExistingName)
            .then(CommonStep::ExpectStatus(409)),
    ];

    for (field, violations) in invalid_examples() {
        for violation in violations {
            scenarios.push(rejected(
                format!("Update rejects {violation} {field}"),
                UpdateStep::UpdateInvalid { field, violation },
            ));
        }
    }

    for raw in INVALID_INSPIRATION_ITEMS {
        scenarios.push(rejected(
            format!("Update rejects inspiration item {raw:?}"),
            UpdateStep::UpdateWithInspirationItem(raw.to_string()),
        ));
    }

    scenarios
}
