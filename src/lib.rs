//! Workflow layer for the crm-seed CLI.
//!
//! The binary is a thin adapter: argument structs live in [`args`],
//! and [`workflow`] wires the planner, export, persistence, and API
//! client crates into the generate / post / delete phases. The core
//! generation logic lives in the workspace library crates.

pub mod args;
pub mod workflow;
