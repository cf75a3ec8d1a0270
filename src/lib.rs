//! Inspection report aggregation.
//!
//! Takes the problems found by an external analysis engine, classifies them
//! against configured severity tables, decides a pass/fail verdict from error
//! and warning budgets, and renders text, HTML and JSON reports with the
//! offending code highlighted in context.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod input;
pub mod lang;
pub mod locator;
pub mod pipeline;
pub mod reporting;
pub mod syntax;
pub mod threshold;
pub mod types;
