//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep API handler layers decoupled from storage details.

pub mod entity_type_service;
