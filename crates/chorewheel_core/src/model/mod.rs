//! Domain model for the household chore rotation.
//!
//! # Responsibility
//! - Define canonical data structures shared by rotation math, the fast-path
//!   state store and the durable ledger.
//! - Keep lifecycle helpers for completion toggling next to the data.
//!
//! # Invariants
//! - Members and chores are identified by stable ids; names are display data.
//! - Ledger rows snapshot chore name/frequency so history survives renames
//!   and deletions.

pub mod chore;
pub mod ledger;
pub mod member;
pub mod state;
