//! Scenario layer of the character API suite.
//!
//! Scenarios are declarative lists of steps ([`scenario::Scenario`]); the
//! [`runner::Runner`] executes them one after another against a
//! [`context::SuiteContext`] it does not own, giving each scenario a fresh
//! [`world::World`] and a time budget.

pub mod assertions;
pub mod attachment;
pub mod config;
pub mod context;
pub mod error;
pub mod features;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod steps;
pub mod world;
