//! # Ports Layer
//!
//! Trait and message definitions sitting between the domain rules and the
//! outside world.
//!
//! - **Driving port (inbound)**: [`inbound::Payload`] — the tagged payload
//!   the collaborator (consensus layer) hands to the processor.
//! - **Driven port (outbound)**: [`outbound::StateStore`] — the raw
//!   key/value state-store interface the facade composes.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
