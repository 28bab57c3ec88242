//! Infrastructure layer for templink
//!
//! Contains low-level implementations and external integrations.

pub mod ast;
pub mod file_filter;
pub mod text;
