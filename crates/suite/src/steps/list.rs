use std::fmt;

use forge_client::ListParams;
use serde_json::Value;

use crate::assertions::{ensure, ensure_dto_contract, ensure_eq, ensure_status};
use crate::context::SuiteContext;
use crate::error::StepError;
use crate::world::World;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Query string with parameter names the service does not know.
pub const UNKNOWN_PARAMS_PATH: &str = "/characters?limite=6&pagina=2";

#[derive(Debug, Clone, PartialEq)]
pub enum ListStep {
    Request(ListParams),
    RequestWithUnknownParams,
    /// Page 1, limit 10.
    ExpectDefaultPagination,
    ExpectPagination { page: u64, limit: u64 },
    /// Page 1 with the given limit.
    ExpectLimitApplied(u64),
    ExpectEmptyPage(u64),
    /// Every returned character satisfies the DTO contract.
    ExpectContract,
}

/// The list envelope, checked on the raw JSON.
struct Listing {
    characters: Vec<Value>,
    page: u64,
    limit: u64,
}

fn listing(world: &World) -> Result<Listing, StepError> {
    let response = world.response()?;
    ensure_status(response, 200)?;
    let body = response.json_value()?;

    let characters = body
        .get("characters")
        .and_then(Value::as_array)
        .cloned()
        .ok_or_else(|| StepError::assertion(format!("characters must be an array: {body}")))?;
    let number = |key: &str| {
        body.get(key)
            .and_then(Value::as_u64)
            .ok_or_else(|| StepError::assertion(format!("{key} must be a non-negative integer: {body}")))
    };
    let page = number("page")?;
    let limit = number("limit")?;
    number("total")?;

    Ok(Listing {
        characters,
        page,
        limit,
    })
}

fn expect_page(world: &World, page: u64, limit: u64) -> Result<Listing, StepError> {
    let listing = listing(world)?;
    ensure_eq("page", page, listing.page)?;
    ensure_eq("limit", limit, listing.limit)?;
    ensure(
        listing.characters.len() as u64 <= limit,
        format!(
            "Got {} characters for limit {limit}",
            listing.characters.len()
        ),
    )?;
    Ok(listing)
}

impl ListStep {
    pub async fn run(&self, ctx: &SuiteContext, world: &mut World) -> Result<(), StepError> {
        match self {
            Self::Request(params) => {
                let response = ctx.characters().list_characters(params).await?;
                world.record(response, None);
            }
            Self::RequestWithUnknownParams => {
                let response = ctx.api().get(UNKNOWN_PARAMS_PATH).await?;
                world.record(response, None);
            }
            Self::ExpectDefaultPagination => {
                expect_page(world, DEFAULT_PAGE, DEFAULT_LIMIT)?;
            }
            Self::ExpectPagination { page, limit } => {
                expect_page(world, *page, *limit)?;
            }
            Self::ExpectLimitApplied(limit) => {
                expect_page(world, DEFAULT_PAGE, *limit)?;
            }
            Self::ExpectEmptyPage(page) => {
                let listing = expect_page(world, *page, DEFAULT_LIMIT)?;
                ensure(
                    listing.characters.is_empty(),
                    format!("Page {page} should be empty, got {} characters", listing.characters.len()),
                )?;
            }
            Self::ExpectContract => {
                for character in &listing(world)?.characters {
                    ensure_dto_contract(character)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for ListStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(ListParams { page: None, limit: None }) => {
                write!(f, "I request the list of characters without pagination parameters")
            }
            Self::Request(ListParams { page: Some(page), limit: Some(limit) }) => {
                write!(f, "I request the list of characters with page {page} and limit {limit}")
            }
            Self::Request(ListParams { page: None, limit: Some(limit) }) => {
                write!(f, "I request the list of characters with limit {limit}")
            }
            Self::Request(ListParams { page: Some(page), limit: None }) => {
                write!(f, "I request the list of characters with page {page}")
            }
            Self::RequestWithUnknownParams => {
                write!(f, "I request the list of characters with unknown query parameters")
            }
            Self::ExpectDefaultPagination => {
                write!(f, "the response should use default pagination")
            }
            Self::ExpectPagination { page, limit } => {
                write!(f, "the response should respect page {page} and limit {limit}")
            }
            Self::ExpectLimitApplied(limit) => write!(f, "the response should apply limit {limit}"),
            Self::ExpectEmptyPage(page) => {
                write!(f, "the response should return an empty list for page {page}")
            }
            Self::ExpectContract => {
                write!(f, "each returned character should match the DTO contract")
            }
        }
    }
}
