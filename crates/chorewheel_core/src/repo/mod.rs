//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value contract of the durable ledger store.
//! - Isolate SQLite query details from reconciliation orchestration.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - Listing order is deterministic; callers never depend on store-iteration
//!   order.

pub mod ledger_repo;
