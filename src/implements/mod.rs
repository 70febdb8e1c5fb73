pub mod types;
pub use types::*;
pub mod errors;
pub use errors::*;
pub mod parser;
pub mod raw_hand_organizer;
pub use raw_hand_organizer::*;
pub mod yaku_checker;
pub use yaku_checker::*;
pub mod fu_calculator;
pub use fu_calculator::*;
pub mod score_calculator;
pub use score_calculator::*;

use log::debug;
use types::game::AgariContext;
use types::scoring::Evaluation;
use types::tiles::Hai;

/// Number of tiles in a finished concealed hand.
pub const HAND_SIZE: usize = 14;

/// Scores a concealed hand.
///
/// Returns `Evaluation::Incomplete` while the hand does not hold exactly
/// 14 tiles. A hand with neither a 4-meld/1-pair split nor seven pairs is
/// still priced (yaku list possibly empty); callers should treat a result
/// without yaku as no valid win.
pub fn calculate_agari(hand_tiles: &[Hai], context: &AgariContext) -> CalcResult<Evaluation> {
    // 1. Reject malformed input and count tiles
    let counts = validate_input(hand_tiles, context)?;

    if hand_tiles.len() != HAND_SIZE {
        debug!("hand incomplete: {} tiles", hand_tiles.len());
        return Ok(Evaluation::Incomplete {
            tile_count: hand_tiles.len(),
        });
    }

    // 2. Organize Hand
    let structure = organize_hand(&counts);
    debug!("hand structure: {:?}", structure);

    // 3. Check Yaku
    let yaku_result = check_all_yaku(&counts, structure, context);

    // 4. Calculate Final Score
    let result = calculate_score(yaku_result, context);
    debug!("scored hand\n{}", result);

    Ok(Evaluation::Complete(result))
}
