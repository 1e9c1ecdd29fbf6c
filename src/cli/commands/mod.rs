//! CLI commands module

pub mod audit;
