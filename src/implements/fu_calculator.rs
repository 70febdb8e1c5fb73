//! # Fu Calculation
//!
//! Fu for a fully concealed hand. Waits are not modelled, so there is no
//! wait fu; quads do not exist, so only triplets add meld fu.

use super::types::{
    game::{AgariContext, AgariType},
    hand::{HandStructure, MentsuType},
    tiles::{Hai, Jihai},
    yaku::Yaku,
};
use super::yaku_checker::YakuResult;

/// Calculates the fu for a checked hand.
///
/// Precedence: 七対子 is always 25, 平和 is fixed at 20 (tsumo) or
/// 30 (ron); anything else is built up from 20 and rounded up to the
/// nearest 10.
pub fn calculate_fu(yaku_result: &YakuResult, context: &AgariContext) -> u8 {
    // --- Exception 1: Chiitoitsu ---
    if matches!(yaku_result.hand_structure, HandStructure::Chiitoitsu { .. }) {
        return 25;
    }

    // --- Exception 2: Pinfu ---
    if yaku_result.has(Yaku::Pinfu) {
        return match context.agari_type {
            AgariType::Tsumo => 20,
            AgariType::Ron => 30,
        };
    }

    // --- Standard Fu Calculation ---
    let mut fu: u32 = 20; // Futei (Base fu)

    // 1. Agari Type
    match context.agari_type {
        AgariType::Tsumo => fu += 2,
        AgariType::Ron => fu += 10, // Menzen Ron fu
    }

    if let HandStructure::Standard(hand) = &yaku_result.hand_structure {
        // 2. Pair (Atama)
        if is_value_pair(&hand.atama, context) {
            fu += 2;
        }

        // 3. Melds: concealed triplets only
        for mentsu in &hand.mentsu {
            if mentsu.mentsu_type == MentsuType::Koutsu {
                fu += if mentsu.tiles[0].is_yaochuu() { 8 } else { 4 };
            }
        }
    }

    round_up_10(fu) as u8
}

/// A dragon, the seat wind or the prevalent wind. Worth 2 fu once, even
/// when the seat and prevalent wind are the same tile.
fn is_value_pair(tile: &Hai, context: &AgariContext) -> bool {
    if tile.is_sangenpai() {
        return true;
    }
    match tile {
        Hai::Jihai(Jihai::Kaze(k)) => *k == context.player.jikaze || *k == context.game.bakaze,
        _ => false,
    }
}

fn round_up_10(n: u32) -> u32 {
    n.div_ceil(10) * 10
}
