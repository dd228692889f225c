//! Universal properties the processor must hold regardless of which
//! operation is applied: determinism, balance conservation, and
//! endorsement enforcement.
