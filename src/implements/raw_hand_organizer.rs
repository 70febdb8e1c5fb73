use super::errors::{AgariError, CalcResult};
use super::types::{
    game::AgariContext,
    hand::{AgariHand, Counts, HandStructure, Mentsu},
    tiles::{index_to_tile, tile_to_index, Hai, SUHAI_ALL},
};
use super::HAND_SIZE;
use log::trace;

/// Builds the canonical per-tile count array for a hand.
///
/// Tiles must already be valid; see [`validate_input`]. Counts saturate
/// at `u8::MAX`.
pub fn count_tiles(tiles: &[Hai]) -> Counts {
    let mut counts = [0u8; 34];
    for tile in tiles {
        let slot = &mut counts[tile_to_index(tile)];
        *slot = slot.saturating_add(1);
    }
    counts
}

// === Input Validation Module ===
mod input_validator {
    use super::*;

    /// Every tile must have a legal rank and appear at most four times.
    /// Counting stops at the first fifth copy.
    pub fn validate_tiles(tiles: &[Hai]) -> CalcResult<Counts> {
        if let Some(bad) = tiles.iter().find(|t| !t.is_valid()) {
            return Err(AgariError::InvalidTile(*bad));
        }
        let mut counts = [0u8; 34];
        for tile in tiles {
            let slot = &mut counts[tile_to_index(tile)];
            if *slot == 4 {
                return Err(AgariError::TooManyCopies {
                    tile: *tile,
                    count: 5,
                });
            }
            *slot += 1;
        }
        Ok(counts)
    }

    /// Red fives can only be declared for fives actually held.
    pub fn validate_aka_dora(counts: &Counts, context: &AgariContext) -> CalcResult<()> {
        for suit in SUHAI_ALL {
            let declared = context.game.aka_dora.get(suit);
            let available = counts[tile_to_index(&Hai::Suhai(5, suit))];
            if declared > available {
                return Err(AgariError::AkaDoraExceedsFives {
                    suit,
                    declared,
                    available,
                });
            }
        }
        Ok(())
    }
}

/// Checks the tiles and context for malformed input and returns the counts.
/// A short or long hand is not an error here, and red fives are only
/// checked against a full hand.
pub fn validate_input(tiles: &[Hai], context: &AgariContext) -> CalcResult<Counts> {
    let counts = input_validator::validate_tiles(tiles)?;
    if tiles.len() == HAND_SIZE {
        input_validator::validate_aka_dora(&counts, context)?;
    }
    Ok(counts)
}

/// 七対子: exactly seven identities held twice, nothing else.
pub fn is_chiitoitsu(counts: &Counts) -> bool {
    let mut pairs = 0;
    for &c in counts.iter() {
        match c {
            0 => {}
            2 => pairs += 1,
            _ => return false,
        }
    }
    pairs == 7
}

/// The seven pair tiles in canonical order, if the hand is seven pairs.
pub fn chiitoitsu_pairs(counts: &Counts) -> Option<[Hai; 7]> {
    if !is_chiitoitsu(counts) {
        return None;
    }
    let pairs: Vec<Hai> = (0..34)
        .filter(|&i| counts[i] == 2)
        .map(index_to_tile)
        .collect();
    pairs.try_into().ok()
}

// === Recursive Parsing Logic ===
mod recursive_parser {
    use super::*;

    /// Recursively finds melds from a tile-count array.
    ///
    /// `counts` is restored to its input state whenever this returns false.
    pub fn find_mentsu_recursive(counts: &mut Counts, mentsu: &mut Vec<Mentsu>) -> bool {
        let Some(i) = counts.iter().position(|&c| c > 0) else {
            return true; // Success: all tiles used up
        };

        // --- Try to form a Triplet (Koutsu) ---
        if counts[i] >= 3 {
            counts[i] -= 3;
            mentsu.push(Mentsu::koutsu(index_to_tile(i)));
            trace!("try koutsu {} (depth {})", index_to_tile(i), mentsu.len());

            if find_mentsu_recursive(counts, mentsu) {
                return true;
            }

            // Backtrack
            mentsu.pop();
            counts[i] += 3;
        }

        // --- Try to form a Sequence (Shuntsu) ---
        // i < 27: not Jihai; (i % 9) < 7: not 8s or 9s
        if i < 27 && (i % 9) < 7 && counts[i + 1] > 0 && counts[i + 2] > 0 {
            counts[i] -= 1;
            counts[i + 1] -= 1;
            counts[i + 2] -= 1;
            mentsu.push(Mentsu::shuntsu([
                index_to_tile(i),
                index_to_tile(i + 1),
                index_to_tile(i + 2),
            ]));
            trace!("try shuntsu from {} (depth {})", index_to_tile(i), mentsu.len());

            if find_mentsu_recursive(counts, mentsu) {
                return true;
            }

            // Backtrack
            mentsu.pop();
            counts[i] += 1;
            counts[i + 1] += 1;
            counts[i + 2] += 1;
        }

        false
    }
}

/// Finds the first 4-meld, 1-pair split of a 14-tile count array.
///
/// Pair candidates are tried in canonical order and, for each, triplets are
/// preferred over sequences, so a hand readable several ways always gets the
/// same single reading.
pub fn find_decomposition(counts: &Counts) -> Option<AgariHand> {
    for i in 0..34 {
        if counts[i] < 2 {
            continue;
        }
        let mut remaining = *counts;
        remaining[i] -= 2;
        let mut mentsu: Vec<Mentsu> = Vec::with_capacity(4);

        if recursive_parser::find_mentsu_recursive(&mut remaining, &mut mentsu) {
            let mentsu: Result<[Mentsu; 4], _> = mentsu.try_into();
            if let Ok(mentsu) = mentsu {
                return Some(AgariHand {
                    mentsu,
                    atama: index_to_tile(i),
                });
            }
        }
    }
    None
}

/// Organizes a 14-tile count array into seven pairs, a standard hand, or
/// neither. Seven pairs is checked first and, when it holds, the meld
/// search is skipped.
pub fn organize_hand(counts: &Counts) -> HandStructure {
    if let Some(pairs) = chiitoitsu_pairs(counts) {
        return HandStructure::Chiitoitsu { pairs };
    }
    match find_decomposition(counts) {
        Some(agari_hand) => HandStructure::Standard(agari_hand),
        None => HandStructure::Irregular,
    }
}
