//! Initialization of the process-wide tables
//!
//! The reachability tables and the policy action table are built lazily on
//! first use. Call `init_all_tables_once` before spawning workers so none of
//! them pays for (or races on) the first access.

use std::sync::Once;

use once_cell::sync::Lazy;

use crate::bitboard::ATTACK_TABLES;
use crate::movegen::action_index::ACTION_TABLE;

static INIT_ONCE: Once = Once::new();

/// Build every static table, once.
///
/// Safe to call any number of times from any thread.
///
/// - No logging is performed during initialization
/// - Order: reachability tables, then the action table (which reads them)
pub fn init_all_tables_once() {
    INIT_ONCE.call_once(|| {
        Lazy::force(&ATTACK_TABLES);
        Lazy::force(&ACTION_TABLE);
    });
}
