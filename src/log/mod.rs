//! Logging and observability
//!
//! Append-only JSONL history of render runs.

pub mod jsonl;

pub use jsonl::{JsonlLogger, RunRecord, StopReason};
