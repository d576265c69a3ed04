//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate formatting and persistence into task-level operations.
//! - Keep view layers decoupled from storage details.

pub mod task_store;
