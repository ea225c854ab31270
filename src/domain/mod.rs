//! Domain layer containing the processor's vocabulary and pure mapping logic.
//!
//! # Module Organization
//!
//! - `gateway` - Endpoints, code tables, envelope types and response normalization

pub mod gateway;
