//! Move generation
//!
//! - `generator`: pseudo-legal generation per piece kind
//! - `action_index`: dense policy index for the network head
//! - `perft`: move-path counting used as a regression oracle

pub(crate) mod action_index;
mod generator;
mod perft;

pub use action_index::NUM_ACTIONS;
pub(crate) use generator::generate_pseudolegal;
pub use perft::{perft, perft_divide};
