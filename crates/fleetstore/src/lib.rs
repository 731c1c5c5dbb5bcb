//! Thin client for the remote fleet store (Supabase/PostgREST).
//!
//! Exposes the two operations the seeder needs — select-with-projection and
//! insert — behind the [`RecordStore`] trait, plus a batched insert helper
//! that degrades to per-row writes when a batch is rejected.

mod batch;
mod client;
mod store;
pub mod tables;

pub use batch::{insert_batched, WriteFailure, WriteOutcome};
pub use client::RestStore;
pub use store::RecordStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request: HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid batch size: {0} (must be >= 1)")]
    InvalidBatchSize(usize),
}

pub type Result<T> = std::result::Result<T, StoreError>;
