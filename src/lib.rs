//! Command-line shell around the registrant form engine.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
