//! Candidate cost and offer quoting for consultant placements.
//!
//! The core of the crate is [`workflows::quote`]: a phase-based intake
//! validator feeding a pure pricing engine that turns a validated quote
//! request into a fully itemized employer cost breakdown and candidate
//! offer. Everything around it (config, telemetry, HTTP router) is service
//! plumbing for callers that want the engine behind an API.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
