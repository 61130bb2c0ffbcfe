//! Core library components.
//!
//! This module contains the resolution engine and the pieces it consumes:
//! configuration, secret stores and the domain types flowing between them.

pub mod config;
pub mod constants;
pub mod domain;
pub mod resolver;
pub mod store;
pub mod types;
pub mod validation;
