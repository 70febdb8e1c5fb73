//! Score calculator for fully concealed riichi mahjong hands.
//!
//! ```
//! use riichi_score::implements::{calculate_agari, parser::parse_hand};
//! use riichi_score::implements::game::AgariContext;
//!
//! let hand = parse_hand("234m567m345p678p44s").unwrap();
//! let evaluation = calculate_agari(&hand.tiles, &AgariContext::default()).unwrap();
//! assert_eq!(evaluation.result().unwrap().total_payment, 2000);
//! ```

pub mod implements;

pub use implements::calculate_agari;
