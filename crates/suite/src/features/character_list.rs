use forge_client::ListParams;

use crate::scenario::Scenario;
use crate::steps::{CommonStep, ListStep};

pub const FEATURE: &str = "character-list";

fn list(name: &str, params: ListParams) -> Scenario {
    Scenario::new(FEATURE, name)
        .given(CommonStep::ServiceAvailable)
        .when(ListStep::Request(params))
}

pub fn scenarios() -> Vec<Scenario> {
    vec![
        list("List without pagination uses defaults", ListParams::new())
            .then(ListStep::ExpectDefaultPagination)
            .then(ListStep::ExpectContract),
        list("List respects page 1 and limit 5", ListParams::new().page(1).limit(5))
            .then(ListStep::ExpectPagination { page: 1, limit: 5 })
            .then(ListStep::ExpectContract),
        list("List respects page 2 and limit 3", ListParams::new().page(2).limit(3))
            .then(ListStep::ExpectPagination { page: 2, limit: 3 }),
        list("List applies limit only", ListParams::new().limit(5))
            .then(ListStep::ExpectLimitApplied(5)),
        list("Non-numeric limit falls back to the default", ListParams::new().limit("abc"))
            .then(ListStep::ExpectLimitApplied(10)),
        list("Non-numeric page defaults to page 1", ListParams::new().page("abc"))
            .then(ListStep::ExpectDefaultPagination),
        list("Page out of range returns an empty list", ListParams::new().page(9999))
            .then(ListStep::ExpectEmptyPage(9999)),
        Scenario::new(FEATURE, "Unknown query parameters are ignored")
            .given(CommonStep::ServiceAvailable)
            .when(ListStep::RequestWithUnknownParams)
            .then(ListStep::ExpectDefaultPagination),
    ]
}
