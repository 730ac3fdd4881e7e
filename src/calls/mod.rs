//! Claims on a discard: eligibility and arbitration.

pub mod arbitration;
pub mod available;

pub use arbitration::{register_call, resolve_call_window, CallResolution, PendingCall};
pub(crate) use available::calls_on_discard;
pub use available::{
    compute_available_calls, find_chi_combinations, find_gang_tiles, find_peng_tiles, forms_call,
    AvailableCall, CallTiles, CallType,
};
