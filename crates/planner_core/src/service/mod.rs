//! Use-case services over the planner aggregate.
//!
//! # Responsibility
//! - Orchestrate mutate-then-persist flows for every domain family.
//! - Keep front-ends decoupled from storage details.

pub mod planner_service;
