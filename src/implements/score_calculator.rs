//! # Riichi Mahjong Score Calculator
//!
//! This module takes the output from the `yaku_checker` (`YakuResult`)
//! and the win context to calculate the final score (`AgariResult`),
//! including han, fu, and point payments.

use super::fu_calculator::calculate_fu;
use super::types::{
    game::{AgariContext, AgariType},
    scoring::{AgariResult, HandLimit, Payment},
};
use super::yaku_checker::YakuResult;

// --- Main Public Function ---

/// Calculates the final score of a checked hand.
///
/// # Arguments
/// * `yaku_result` - The output from `yaku_checker::check_all_yaku`.
/// * `context` - Win method, seat, dealer flag and red fives.
///
/// # Returns
/// * `AgariResult` - A struct containing the full score breakdown.
pub fn calculate_score(yaku_result: YakuResult, context: &AgariContext) -> AgariResult {
    let han = yaku_result.total_han();
    let fu = calculate_fu(&yaku_result, context);

    let (basic_points, limit_name) = calculate_basic_points(han, fu);
    let payment = calculate_payment(basic_points, context.player.is_oya, context.agari_type);

    AgariResult {
        han,
        fu,
        yaku_list: yaku_result.yaku_list,
        structure: yaku_result.hand_structure,
        limit_name,
        total_payment: payment.total(),
        payment,
    }
}

// --- Helper Functions ---

/// Calculates the "basic points" (A = fu * 2^(han + 2)) and caps it at the
/// appropriate limit. Returns (basic_points, Option<HandLimit>).
pub fn calculate_basic_points(han: u8, fu: u8) -> (u32, Option<HandLimit>) {
    // Counted yakuman
    if han >= 13 {
        return (8000, Some(HandLimit::Yakuman));
    }
    if han >= 11 {
        return (6000, Some(HandLimit::Sanbaiman));
    }
    if han >= 8 {
        return (4000, Some(HandLimit::Baiman));
    }
    if han >= 6 {
        return (3000, Some(HandLimit::Haneman));
    }
    if han == 5 {
        return (2000, Some(HandLimit::Mangan));
    }

    // Below 5 han the shift stays well inside u32.
    let basic_points = (fu as u32) << (han + 2);

    // Mangan also caps large-fu hands below 5 han
    // 4 han 30 fu -> 1920
    // 4 han 40 fu -> 2560 (Mangan)
    // 3 han 70 fu -> 2240 (Mangan)
    if basic_points >= 2000 {
        (2000, Some(HandLimit::Mangan))
    } else {
        (basic_points, None)
    }
}

/// Splits basic points into the actual payments, each rounded up to 100.
pub fn calculate_payment(basic_points: u32, is_oya: bool, agari_type: AgariType) -> Payment {
    match (is_oya, agari_type) {
        // Oya Tsumo
        (true, AgariType::Tsumo) => Payment::OyaTsumo {
            each: round_up_100(basic_points * 2),
        },
        // Ko Tsumo
        (false, AgariType::Tsumo) => Payment::KoTsumo {
            ko: round_up_100(basic_points),
            oya: round_up_100(basic_points * 2),
        },
        // Oya Ron
        (true, AgariType::Ron) => Payment::Ron {
            discarder: round_up_100(basic_points * 6),
        },
        // Ko Ron
        (false, AgariType::Ron) => Payment::Ron {
            discarder: round_up_100(basic_points * 4),
        },
    }
}

/// Helper to round a u32 up to the nearest 100.
fn round_up_100(n: u32) -> u32 {
    n.div_ceil(100) * 100
}
