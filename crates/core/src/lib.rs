//! Domain layer of the character API suite.
//!
//! Holds the three shapes of a character (wire DTO, persisted document,
//! canonical test model), the closed vocabularies, and the test-data
//! factories used to build valid and contract-violating payloads. Nothing
//! here performs I/O.

pub mod category;
pub mod character;
pub mod config;
pub mod error;
pub mod invalid_value;
pub mod mapper;
pub mod naming;
pub mod payload;
pub mod status;
pub mod types;
