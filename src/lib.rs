//! FluidSurveys API client library
//!
//! Exposes the client, its response cache and the CLI parser for use by the
//! binary and integration tests.

pub mod cache;
pub mod cli;
pub mod data;

pub use data::{ApiError, Credentials, SurveyId, SurveysClient};
