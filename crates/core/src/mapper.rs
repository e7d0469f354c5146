//! Conversions into the canonical test model.
//!
//! One-directional and test-only: nothing here produces a DTO or a
//! document. Tests compare `CharacterModel` against `CharacterModel`.

use crate::character::{CharacterDocument, CharacterDto, CharacterModel, CreateCharacterPayload};

/// API → canonical model.
pub fn map_dto_to_model(dto: &CharacterDto) -> CharacterModel {
    CharacterModel {
        id: dto.id.clone(),
        name: dto.name.clone(),
        status: dto.status.clone(),
        categories: dto.categories.clone(),
        identity: dto.identity.clone(),
        inspirations: dto.inspirations.clone(),
        notes: dto.notes.clone(),
    }
}

/// Stored document → canonical model. `_id` becomes `id`; timestamps are
/// not part of the comparison.
pub fn map_document_to_model(doc: &CharacterDocument) -> CharacterModel {
    CharacterModel {
        id: doc.id.clone(),
        name: doc.name.clone(),
        status: doc.status.clone(),
        categories: doc.categories.clone(),
        identity: doc.identity.clone(),
        inspirations: doc.inspirations.clone(),
        notes: doc.notes.clone(),
    }
}

/// The model a successful create should produce for `payload` once the
/// service has assigned `id`. An omitted status is expected as `DRAFT`.
pub fn expected_model_from_payload(id: &str, payload: &CreateCharacterPayload) -> CharacterModel {
    CharacterModel {
        id: id.to_string(),
        name: payload.name.clone(),
        status: payload.status.unwrap_or_default().as_str().to_string(),
        categories: payload
            .categories
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
        identity: payload.identity.clone(),
        inspirations: payload.inspirations.clone(),
        notes: payload.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::payload::{build_character_without_notes, build_valid_character_payload};

    fn sample_dto() -> CharacterDto {
        CharacterDto {
            id: "char_abc123".into(),
            name: "Luna_kun_9z9z".into(),
            status: "ACTIVE".into(),
            categories: vec!["Mentor".into(), "Oscuro".into()],
            identity: "identity".into(),
            inspirations: vec!["one".into()],
            notes: None,
        }
    }

    fn document_for(dto: &CharacterDto) -> CharacterDocument {
        let now = Utc::now();
        CharacterDocument {
            id: dto.id.clone(),
            name: dto.name.clone(),
            status: dto.status.clone(),
            categories: dto.categories.clone(),
            identity: dto.identity.clone(),
            inspirations: dto.inspirations.clone(),
            notes: dto.notes.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn dto_and_document_of_same_entity_map_equal() {
        let dto = sample_dto();
        let doc = document_for(&dto);
        assert_eq!(map_dto_to_model(&dto), map_document_to_model(&doc));
    }

    #[test]
    fn mapping_is_lossless() {
        let mut dto = sample_dto();
        dto.notes = Some("kept".into());
        let model = map_dto_to_model(&dto);

        assert_eq!(model.id, dto.id);
        assert_eq!(model.categories, dto.categories);
        assert_eq!(model.inspirations, dto.inspirations);
        assert_eq!(model.notes.as_deref(), Some("kept"));
    }

    #[test]
    fn document_id_is_renamed() {
        let doc = document_for(&sample_dto());
        assert_eq!(map_document_to_model(&doc).id, "char_abc123");
    }

    #[test]
    fn absent_notes_stay_absent() {
        let model = map_dto_to_model(&sample_dto());
        let json = serde_json::to_value(&model).unwrap();
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn expected_model_carries_payload_fields() {
        let payload = build_valid_character_payload();
        let model = expected_model_from_payload("char_1", &payload);

        assert_eq!(model.id, "char_1");
        assert_eq!(model.name, payload.name);
        assert_eq!(model.status, "ACTIVE");
        assert_eq!(model.categories[0], "PersonajeTrágico");
        assert_eq!(model.notes, payload.notes);
    }

    #[test]
    fn expected_model_defaults_status_to_draft() {
        let payload = build_character_without_notes().with_status(None);
        let model = expected_model_from_payload("char_2", &payload);
        assert_eq!(model.status, "DRAFT");
        assert_eq!(model.notes, None);
    }
}
