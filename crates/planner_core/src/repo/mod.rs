//! Persistence layer for the planner aggregate.
//!
//! # Responsibility
//! - Define the state-store contract the service layer talks to.
//! - Keep SQLite and JSON details out of business orchestration.
//!
//! # Invariants
//! - The aggregate is persisted whole; there is no partial write path.
//! - A corrupt persisted document is reported and replaced by defaults on
//!   load, never silently half-parsed.

pub mod state_repo;
