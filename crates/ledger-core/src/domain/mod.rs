//! # Domain Layer
//!
//! Pure business logic: the validation predicates shared by every
//! operation handler. No I/O, no state-store access — callers pass in
//! already-fetched entities.

pub mod rules;

pub use rules::*;
