//! # Yaku Checker
//!
//! Works out which yaku a 14-tile concealed hand earns. Everything here
//! reads either the raw counts or the single decomposition the organizer
//! found; no alternative readings are explored.

use super::types::{
    game::AgariContext,
    game::AgariType,
    hand::{AgariHand, Counts, HandStructure, Mentsu},
    tiles::{index_to_tile, tile_to_index, Hai, Kaze, Suit, Suhai, SANGENPAI_ALL, SUHAI_ALL},
    yaku::{Yaku, YakuEntry},
};

/// The output of the yaku checker, consumed by the fu and score calculators.
#[derive(Debug, Clone)]
pub struct YakuResult {
    pub hand_structure: HandStructure,
    pub yaku_list: Vec<YakuEntry>,
}

impl YakuResult {
    pub fn has(&self, yaku: Yaku) -> bool {
        self.yaku_list.iter().any(|e| e.yaku == yaku)
    }

    pub fn total_han(&self) -> u8 {
        self.yaku_list.iter().fold(0, |acc: u8, e| acc.saturating_add(e.han))
    }
}

/// Han for a yaku in a concealed hand. `AkaDora` is counted per tile by
/// the checker instead.
pub fn han_value(yaku: &Yaku) -> u8 {
    match yaku {
        Yaku::Tanyao
        | Yaku::Pinfu
        | Yaku::Iipeikou
        | Yaku::Riichi
        | Yaku::MenzenTsumo
        | Yaku::YakuhaiJikaze(_)
        | Yaku::YakuhaiBakaze(_)
        | Yaku::Yakuhai(_)
        | Yaku::AkaDora => 1,

        Yaku::DaburuKaze(_)
        | Yaku::Chiitoitsu
        | Yaku::Toitoi
        | Yaku::SanshokuDoujun
        | Yaku::Ittsu => 2,

        Yaku::Honitsu => 3,
        Yaku::Chinitsu => 6,
    }
}

/// Checks every yaku against the organized hand.
pub fn check_all_yaku(
    counts: &Counts,
    hand_structure: HandStructure,
    context: &AgariContext,
) -> YakuResult {
    let mut yaku_list: Vec<YakuEntry> = Vec::new();
    let mut award = |yaku: Yaku| {
        yaku_list.push(YakuEntry {
            yaku,
            han: han_value(&yaku),
        })
    };

    let pinfu = shape_checks::is_pinfu(counts);

    if shape_checks::is_tanyao(counts) {
        award(Yaku::Tanyao);
    }
    if pinfu {
        award(Yaku::Pinfu);
    }
    if pinfu && shape_checks::has_iipeikou(counts) {
        award(Yaku::Iipeikou);
    }
    if context.player.is_riichi {
        award(Yaku::Riichi);
    }
    if context.agari_type == AgariType::Tsumo {
        award(Yaku::MenzenTsumo);
    }

    match &hand_structure {
        HandStructure::Chiitoitsu { .. } => award(Yaku::Chiitoitsu),
        HandStructure::Standard(agari_hand) => {
            if meld_checks::is_toitoi(agari_hand) {
                award(Yaku::Toitoi);
            }
            if meld_checks::is_sanshoku_doujun(&agari_hand.mentsu) {
                award(Yaku::SanshokuDoujun);
            }
            if meld_checks::is_ittsu(&agari_hand.mentsu) {
                award(Yaku::Ittsu);
            }
        }
        HandStructure::Irregular => {}
    }

    match shape_checks::flush_kind(counts) {
        Some(true) => award(Yaku::Chinitsu),
        Some(false) => award(Yaku::Honitsu),
        None => {}
    }

    for yaku in yakuhai_checks::wind_yaku(counts, context) {
        award(yaku);
    }
    for dragon in SANGENPAI_ALL {
        if counts[tile_to_index(&Hai::from(dragon))] >= 3 {
            award(Yaku::Yakuhai(dragon));
        }
    }

    let aka = context.game.aka_dora.total();
    if aka > 0 {
        yaku_list.push(YakuEntry {
            yaku: Yaku::AkaDora,
            han: aka,
        });
    }

    YakuResult {
        hand_structure,
        yaku_list,
    }
}

// === Count-Based Checks ===
mod shape_checks {
    use super::*;

    fn suit_base(suit: Suhai) -> usize {
        tile_to_index(&Hai::Suhai(1, suit))
    }

    /// 断幺九: no terminals, no honors.
    pub fn is_tanyao(counts: &Counts) -> bool {
        counts
            .iter()
            .enumerate()
            .all(|(i, &c)| c == 0 || !index_to_tile(i).is_yaochuu())
    }

    /// Greedy sequence stripping: within each suit, the lowest remaining
    /// rank must start a run. Honors are never consumed, so any honor left
    /// fails the check.
    pub fn only_sequences(counts: &Counts) -> bool {
        let mut c = *counts;
        for suit in SUHAI_ALL {
            let base = suit_base(suit);
            for n in 0..9 {
                let i = base + n;
                while c[i] > 0 {
                    if n >= 7 || c[i + 1] == 0 || c[i + 2] == 0 {
                        return false;
                    }
                    c[i] -= 1;
                    c[i + 1] -= 1;
                    c[i + 2] -= 1;
                }
            }
        }
        c.iter().all(|&v| v == 0)
    }

    /// 平和 by shape alone: some non-honor pair leaves only sequences.
    /// The wait is not inspected.
    pub fn is_pinfu(counts: &Counts) -> bool {
        (0..27).any(|i| {
            if counts[i] < 2 {
                return false;
            }
            let mut rest = *counts;
            rest[i] -= 2;
            only_sequences(&rest)
        })
    }

    /// 一盃口 approximated from counts: n, n+1, n+2 of one suit all held twice.
    pub fn has_iipeikou(counts: &Counts) -> bool {
        SUHAI_ALL.iter().any(|&suit| {
            let base = suit_base(suit);
            (0..7).any(|n| (0..3).all(|k| counts[base + n + k] >= 2))
        })
    }

    /// `Some(true)` for 清一色, `Some(false)` for 混一色, `None` otherwise.
    pub fn flush_kind(counts: &Counts) -> Option<bool> {
        let mut suits: Vec<Suit> = Vec::new();
        for (i, &c) in counts.iter().enumerate() {
            if c == 0 {
                continue;
            }
            let suit = index_to_tile(i).suit();
            if !suits.contains(&suit) {
                suits.push(suit);
            }
        }
        let numbered = suits.iter().filter(|s| matches!(s, Suit::Number(_))).count();
        let honors = suits.contains(&Suit::Honor);
        match (numbered, honors) {
            (1, false) => Some(true),
            (1, true) => Some(false),
            _ => None,
        }
    }
}

// === Decomposition-Based Checks ===
mod meld_checks {
    use super::*;

    fn has_shuntsu(mentsu: &[Mentsu; 4], start: Hai) -> bool {
        mentsu.iter().any(|m| m.is_shuntsu() && m.head() == start)
    }

    /// 対々和
    pub fn is_toitoi(agari_hand: &AgariHand) -> bool {
        agari_hand.mentsu.iter().all(Mentsu::is_koutsu)
    }

    /// 三色同順: the same run in all three suits.
    pub fn is_sanshoku_doujun(mentsu: &[Mentsu; 4]) -> bool {
        (1..=7).any(|n| {
            SUHAI_ALL
                .iter()
                .all(|&suit| has_shuntsu(mentsu, Hai::Suhai(n, suit)))
        })
    }

    /// 一気通貫: 123, 456 and 789 of one suit.
    pub fn is_ittsu(mentsu: &[Mentsu; 4]) -> bool {
        SUHAI_ALL.iter().any(|&suit| {
            [1, 4, 7]
                .iter()
                .all(|&n| has_shuntsu(mentsu, Hai::Suhai(n, suit)))
        })
    }
}

// === Value Tile Checks ===
mod yakuhai_checks {
    use super::*;

    /// Seat and prevalent wind triplets. When both winds are the same tile
    /// the triplet is a single 2-han ダブ風 rather than two separate yaku.
    pub fn wind_yaku(counts: &Counts, context: &AgariContext) -> Vec<Yaku> {
        let jikaze = context.player.jikaze;
        let bakaze = context.game.bakaze;
        let is_triplet = |k: Kaze| counts[tile_to_index(&Hai::from(k))] >= 3;

        let mut out = Vec::new();
        if jikaze == bakaze {
            if is_triplet(jikaze) {
                out.push(Yaku::DaburuKaze(jikaze));
            }
        } else {
            if is_triplet(jikaze) {
                out.push(Yaku::YakuhaiJikaze(jikaze));
            }
            if is_triplet(bakaze) {
                out.push(Yaku::YakuhaiBakaze(bakaze));
            }
        }
        out
    }
}
