//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations and persistence into use-case APIs.
//! - Keep callers decoupled from storage details.

pub mod session_service;
