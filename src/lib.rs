//! Checklist: a persistent terminal task list.
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod collection;
pub mod config;
pub mod controller;
pub mod logging;
pub mod store;
pub mod types;
pub mod ui;
pub mod view;
