use forge_core::category::Category;
use forge_core::invalid_value::{ViolationKind, INVALID_ENUM_TOKEN};
use forge_core::payload::CharacterField;
use forge_core::status::CharacterStatus;

use crate::scenario::Scenario;
use crate::steps::{CommonStep, CreateStep, PayloadVariant};

pub const FEATURE: &str = "character-create";

/// Violations each field is sent with on create. `missing` notes and
/// empty or blank notes are accepted by the service, so they are not here.
pub fn invalid_examples() -> Vec<(CharacterField, Vec<ViolationKind>)> {
    use ViolationKind as V;

    let string_field = vec![
        V::Missing,
        V::Empty,
        V::Spaces,
        V::Null,
        V::BooleanFalse,
        V::BooleanTrue,
        V::Number,
        V::Array,
    ];
    let array_field = vec![
        V::Missing,
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
        (
            CharacterField::Status,
            vec![
                V::Empty,
                V::Spaces,
                V::Null,
                V::BooleanFalse,
                V::BooleanTrue,
                V::Number,
                V::Array,
            ],
        ),
        (CharacterField::Categories, array_field.clone()),
        (CharacterField::Inspirations, array_field),
        (
            CharacterField::Notes,
            vec![V::Null, V::BooleanFalse, V::BooleanTrue, V::Number, V::Array],
        ),
    ]
}

pub const INVALID_INSPIRATION_ITEMS: [&str; 4] = ["", "   ", "123", "true"];

fn create(name: impl Into<String>, step: CreateStep) -> Scenario {
    Scenario::new(FEATURE, name)
        .given(CommonStep::ServiceAvailable)
        .when(step)
}

fn rejected(name: impl Into<String>, step: CreateStep) -> Scenario {
    create(name, step).then(CommonStep::ExpectStatus(400))
}

pub fn scenarios() -> Vec<Scenario> {
    let mut scenarios = vec![
        create("Create with a valid payload", CreateStep::Create(PayloadVariant::Baseline))
            .then(CreateStep::ExpectCreated)
            .then(CreateStep::ExpectMatchesPayload)
            .then(CreateStep::ExpectStored)
            .then(CreateStep::ExpectFetchMatchesCreated),
        create("Create a draft character", CreateStep::Create(PayloadVariant::Draft))
            .then(CreateStep::ExpectCreated)
            .then(CreateStep::ExpectStatusField("DRAFT".to_string()))
            .then(CreateStep::ExpectListedUnderStatus("DRAFT".to_string())),
        create("Create an archived character", CreateStep::Create(PayloadVariant::Archived))
            .then(CreateStep::ExpectCreated)
            .then(CreateStep::ExpectStatusField("ARCHIVED".to_string()))
            .then(CreateStep::ExpectStored),
        create(
            "Create with custom categories",
            CreateStep::Create(PayloadVariant::Categories(vec![
                Category::Protector,
                Category::Mentor,
                Category::Resiliencia,
            ])),
        )
        .then(CreateStep::ExpectCreated)
        .then(CreateStep::ExpectMatchesPayload),
        create("Create without notes", CreateStep::Create(PayloadVariant::WithoutNotes))
            .then(CreateStep::ExpectCreated)
            .then(CreateStep::ExpectNotesAbsent)
            .then(CreateStep::ExpectMatchesPayload)
            .then(CreateStep::ExpectStored),
        create("Status defaults to DRAFT", CreateStep::Create(PayloadVariant::WithoutStatus))
            .then(CreateStep::ExpectCreated)
            .then(CreateStep::ExpectStatusField("DRAFT".to_string()))
            .then(CreateStep::ExpectMatchesPayload),
        rejected(
            "Create with an invalid status value",
            CreateStep::CreateInvalid {
                field: CharacterField::Status,
                violation: ViolationKind::InvalidEnum,
            },
        )
        .then(CommonStep::ExpectErrorMessage(CharacterStatus::invalid_message(INVALID_ENUM_TOKEN))),
        rejected(
            "Create with an unknown category",
            CreateStep::CreateWithUnknownCategory("Villano".to_string()),
        ),
        rejected(
            "Create with duplicated categories",
            CreateStep::CreateWithDuplicateCategories,
        ),
        create("Create with a name that already exists", CreateStep::CreateWithExistingName)
            .then(CommonStep::ExpectStatus(409)),
    ];

    for (field, violations) in invalid_examples() {
        for violation in violations {
            scenarios.push(rejected(
                format!("Create rejects {violation} {field}"),
                CreateStep::CreateInvalid { field, violation },
            ));
        }
    }

    for raw in INVALID_INSPIRATION_ITEMS {
        scenarios.push(rejected(
            format!("Create rejects inspiration item {raw:?}"),
            CreateStep::CreateWithInspirationItem(raw.to_string()),
        ));
    }

    scenarios
}
