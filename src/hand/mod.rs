//! Hand analysis: face counting, win detection and scoring.

pub mod counts;
pub mod score;
pub mod win;

pub use counts::{TileCounts, COPIES_PER_FACE};
pub use score::{
    calculate_score_transfer, check_zero_sum, points_for_fan, Factor, ScoreBreakdown, ScoreItem,
    ScoreSheet, WinContext, WinSource,
};
pub use win::{can_form_standard_hand, is_seven_pairs, is_thirteen_orphans, is_winning_hand, MELDS_PER_HAND};
