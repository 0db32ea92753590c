//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate rotation math, fast-path state and the ledger store into
//!   use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod ledger_service;
