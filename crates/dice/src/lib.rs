//! Deterministic dice streams.
//!
//! Every stream is identified by a structural path string (for example
//! `PLANET-DETAILS/Spinward Marches/1910`). Two streams built from the same
//! path always produce the same rolls, and `sub` derives child streams whose
//! identity is the parent path plus a suffix. There is no process-wide random
//! state, so independent worlds can be generated concurrently.

pub mod chacha;
pub mod scripted;
pub mod stream;


pub use chacha::{ChaChaFlux, seed_from_path};
pub use scripted::ScriptedFlux;
pub use stream::FluxStream;
