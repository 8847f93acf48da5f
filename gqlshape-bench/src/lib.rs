//! # GQLShape Bench
//!
//! Synthetic schemas and documents for GQLShape performance testing.

pub mod fixtures;
