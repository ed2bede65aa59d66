//! Shared foundational types used across the Tagsmith descriptor model.
//!
//! This crate provides stable structural hashing and the single-assignment
//! [`Memo`] cell used for per-instance derived facts.

#![warn(missing_docs)]

pub mod hash;
pub mod memo;

pub use hash::StableHasher;
pub use memo::Memo;
