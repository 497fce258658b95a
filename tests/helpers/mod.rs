//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

pub mod diagnostic_helpers;
pub mod model_fixtures;
