//! Entity matching: registry, extraction, gates and the decision engine.

pub mod engine;
pub mod extract;
pub mod filters;
pub mod registry;
pub mod team;
