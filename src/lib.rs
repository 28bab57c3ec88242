//! templink - Definition resolution for component templates
//!
//! Bridges template-level symbol lookups and host-document path literals
//! to the definition records an editor navigates to.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod infra;
pub mod models;
pub mod services;
