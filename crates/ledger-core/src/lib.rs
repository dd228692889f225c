//! # ledger-core
//!
//! The deterministic transaction-processing core of the asset registry:
//! address derivation, the wire codec, the state facade, the payload
//! dispatcher, and the validation rules and operation handlers built on
//! top of them. No networking, no clock, no randomness — every public
//! function here is a pure mapping from inputs (plus whatever a
//! [`ports::outbound::StateStore`] returns) to outputs.

pub mod adapters;
pub mod address;
pub mod codec;
pub mod dates;
pub mod domain;
pub mod ports;
pub mod service;
pub mod state;

pub use ports::inbound::Payload;
pub use ports::outbound::StateStore;
pub use service::apply;
pub use state::Ledger;
