/// # Core Tile Definitions
///
/// This module defines the most basic components of a Mahjong tile,
/// plus the canonical 34-slot index every search iterates in.
pub mod tiles {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    /// Represents the three numbered suits.
    pub enum Suhai {
        Manzu, // 萬子 (Characters)
        Pinzu, // 筒子 (Circles)
        Souzu, // 索子 (Bamboo)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    /// Represents the four wind directions.
    pub enum Kaze {
        Ton,  // 東 (East)
        Nan,  // 南 (South)
        Shaa, // 西 (West)
        Pei,  // 北 (North)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    /// Represents the three dragons.
    pub enum Sangenpai {
        Haku,  // 白 (White)
        Hatsu, // 發 (Green)
        Chun,  // 中 (Red)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    /// Represents any honor tile (Wind or Dragon).
    pub enum Jihai {
        Kaze(Kaze),
        Sangen(Sangenpai),
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    /// Represents a single Mahjong tile.
    pub enum Hai {
        Suhai(u8, Suhai), // 数牌 (Numbered tile, 1-9)
        Jihai(Jihai),     // 字牌 (Honor tile)
    }

    /// Suit grouping used for flush checks and display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum Suit {
        Number(Suhai),
        Honor,
    }

    pub const SUHAI_ALL: [Suhai; 3] = [Suhai::Manzu, Suhai::Pinzu, Suhai::Souzu];
    pub const KAZE_ALL: [Kaze; 4] = [Kaze::Ton, Kaze::Nan, Kaze::Shaa, Kaze::Pei];
    pub const SANGENPAI_ALL: [Sangenpai; 3] = [Sangenpai::Haku, Sangenpai::Hatsu, Sangenpai::Chun];

    /// Every distinct tile in canonical order (index == `tile_to_index`).
    pub const ALL_HAI: [Hai; 34] = build_all_hai();

    const fn build_all_hai() -> [Hai; 34] {
        let mut out = [Hai::Suhai(1, Suhai::Manzu); 34];
        let mut i = 0;
        while i < 34 {
            out[i] = index_to_tile(i);
            i += 1;
        }
        out
    }

    /// Index 0-8: Manzu 1-9, 9-17: Pinzu 1-9, 18-26: Souzu 1-9,
    /// 27-30: Ton Nan Shaa Pei, 31-33: Haku Hatsu Chun.
    ///
    /// The tile must satisfy [`Hai::is_valid`].
    pub const fn tile_to_index(tile: &Hai) -> usize {
        match *tile {
            Hai::Suhai(n, suit) => {
                let offset = match suit {
                    Suhai::Manzu => 0,
                    Suhai::Pinzu => 9,
                    Suhai::Souzu => 18,
                };
                offset + (n as usize) - 1
            }
            Hai::Jihai(Jihai::Kaze(k)) => 27 + k as usize,
            Hai::Jihai(Jihai::Sangen(s)) => 31 + s as usize,
        }
    }

    /// Inverse of [`tile_to_index`]. `index` must be below 34.
    pub const fn index_to_tile(index: usize) -> Hai {
        match index {
            0..=8 => Hai::Suhai(index as u8 + 1, Suhai::Manzu),
            9..=17 => Hai::Suhai(index as u8 - 8, Suhai::Pinzu),
            18..=26 => Hai::Suhai(index as u8 - 17, Suhai::Souzu),
            27 => Hai::Jihai(Jihai::Kaze(Kaze::Ton)),
            28 => Hai::Jihai(Jihai::Kaze(Kaze::Nan)),
            29 => Hai::Jihai(Jihai::Kaze(Kaze::Shaa)),
            30 => Hai::Jihai(Jihai::Kaze(Kaze::Pei)),
            31 => Hai::Jihai(Jihai::Sangen(Sangenpai::Haku)),
            32 => Hai::Jihai(Jihai::Sangen(Sangenpai::Hatsu)),
            _ => Hai::Jihai(Jihai::Sangen(Sangenpai::Chun)),
        }
    }

    impl Hai {
        pub fn suit(&self) -> Suit {
            match self {
                Hai::Suhai(_, s) => Suit::Number(*s),
                Hai::Jihai(_) => Suit::Honor,
            }
        }

        /// Rank 1-9 for numbered tiles; 1-7 for honors (winds, then dragons).
        pub fn rank(&self) -> u8 {
            match self {
                Hai::Suhai(n, _) => *n,
                Hai::Jihai(Jihai::Kaze(k)) => *k as u8 + 1,
                Hai::Jihai(Jihai::Sangen(s)) => *s as u8 + 5,
            }
        }

        pub fn is_jihai(&self) -> bool {
            matches!(self, Hai::Jihai(_))
        }

        /// Terminal (1 or 9) or honor.
        pub fn is_yaochuu(&self) -> bool {
            match self {
                Hai::Suhai(n, _) => *n == 1 || *n == 9,
                Hai::Jihai(_) => true,
            }
        }

        pub fn is_sangenpai(&self) -> bool {
            matches!(self, Hai::Jihai(Jihai::Sangen(_)))
        }

        pub fn is_valid(&self) -> bool {
            match self {
                Hai::Suhai(n, _) => (1..=9).contains(n),
                Hai::Jihai(_) => true,
            }
        }

        pub fn index(&self) -> usize {
            tile_to_index(self)
        }
    }

    impl From<Kaze> for Hai {
        fn from(k: Kaze) -> Self {
            Hai::Jihai(Jihai::Kaze(k))
        }
    }

    impl From<Sangenpai> for Hai {
        fn from(s: Sangenpai) -> Self {
            Hai::Jihai(Jihai::Sangen(s))
        }
    }

    impl Suhai {
        pub fn letter(&self) -> char {
            match self {
                Suhai::Manzu => 'm',
                Suhai::Pinzu => 'p',
                Suhai::Souzu => 's',
            }
        }
    }

    impl fmt::Display for Hai {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Hai::Suhai(n, s) => write!(f, "{}{}", n, s.letter()),
                Hai::Jihai(_) => write!(f, "{}z", self.rank()),
            }
        }
    }

    impl fmt::Display for Kaze {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                Kaze::Ton => "East",
                Kaze::Nan => "South",
                Kaze::Shaa => "West",
                Kaze::Pei => "North",
            };
            f.write_str(name)
        }
    }

    /// Sorts tiles into display order: Manzu, Pinzu, Souzu, then honors,
    /// ascending rank within each.
    pub fn sort_hai(tiles: &mut [Hai]) {
        tiles.sort_by_key(tile_to_index);
    }
}

/// # Hand Structure and Composition
///
/// Groups, decompositions and the shapes a finished hand can take.
pub mod hand {
    use super::tiles::Hai;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Represents the type of a meld (group of tiles).
    pub enum MentsuType {
        Shuntsu, // 順子 (Sequence)
        Koutsu,  // 刻子 (Triplet)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// A concealed meld. Sequences store their tiles in ascending order.
    pub struct Mentsu {
        pub mentsu_type: MentsuType,
        pub tiles: [Hai; 3],
    }

    impl Mentsu {
        pub fn koutsu(tile: Hai) -> Self {
            Mentsu {
                mentsu_type: MentsuType::Koutsu,
                tiles: [tile, tile, tile],
            }
        }

        pub fn shuntsu(tiles: [Hai; 3]) -> Self {
            Mentsu {
                mentsu_type: MentsuType::Shuntsu,
                tiles,
            }
        }

        pub fn is_koutsu(&self) -> bool {
            self.mentsu_type == MentsuType::Koutsu
        }

        pub fn is_shuntsu(&self) -> bool {
            self.mentsu_type == MentsuType::Shuntsu
        }

        /// The lowest tile of the meld.
        pub fn head(&self) -> Hai {
            self.tiles[0]
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Represents a standard 4-meld, 1-pair winning hand.
    pub struct AgariHand {
        pub mentsu: [Mentsu; 4], // The four melds
        pub atama: Hai,          // 頭 (The pair)
    }

    impl AgariHand {
        /// Every tile of the decomposition, pair first.
        pub fn tiles(&self) -> Vec<Hai> {
            let mut out = Vec::with_capacity(14);
            out.push(self.atama);
            out.push(self.atama);
            for m in &self.mentsu {
                out.extend_from_slice(&m.tiles);
            }
            out
        }
    }

    /// Per-tile counts indexed canonically (see `tiles::tile_to_index`).
    pub type Counts = [u8; 34];

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    /// The recognized structure of a 14-tile hand.
    pub enum HandStructure {
        /// 四面子一頭 (Standard 4 melds, 1 pair)
        Standard(AgariHand),
        /// 七対子 (Seven Pairs), pairs in canonical order.
        Chiitoitsu { pairs: [Hai; 7] },
        /// Neither shape fits. The hand is still scored from its counts.
        Irregular,
    }
}

/// # Game State and Context
///
/// Everything about the win besides the tiles themselves.
pub mod game {
    use super::tiles::{Kaze, Suhai};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Represents how the hand was won.
    pub enum AgariType {
        Tsumo, // 自摸 (Self-draw)
        Ron,   // 栄和 (Win off discard)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Context for the player winning the hand.
    pub struct PlayerContext {
        pub jikaze: Kaze,   // 自風 (Seat Wind)
        pub is_oya: bool,   // 親 (Is player the dealer?)
        pub is_riichi: bool,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    /// 赤ドラ: how many of the held fives are red, per suit.
    pub struct AkaDora {
        pub manzu: u8,
        pub pinzu: u8,
        pub souzu: u8,
    }

    impl AkaDora {
        pub fn get(&self, suit: Suhai) -> u8 {
            match suit {
                Suhai::Manzu => self.manzu,
                Suhai::Pinzu => self.pinzu,
                Suhai::Souzu => self.souzu,
            }
        }

        pub fn get_mut(&mut self, suit: Suhai) -> &mut u8 {
            match suit {
                Suhai::Manzu => &mut self.manzu,
                Suhai::Pinzu => &mut self.pinzu,
                Suhai::Souzu => &mut self.souzu,
            }
        }

        pub fn total(&self) -> u8 {
            self.manzu.saturating_add(self.pinzu).saturating_add(self.souzu)
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Context for the current round of play.
    pub struct GameContext {
        pub bakaze: Kaze,      // 場風 (Prevalent Wind)
        pub aka_dora: AkaDora, // 赤ドラ
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Immutable per-evaluation context.
    pub struct AgariContext {
        pub agari_type: AgariType,
        pub player: PlayerContext,
        pub game: GameContext,
    }

    impl Default for AgariContext {
        /// East round, East seat, non-dealer ron without riichi.
        fn default() -> Self {
            AgariContext {
                agari_type: AgariType::Ron,
                player: PlayerContext {
                    jikaze: Kaze::Ton,
                    is_oya: false,
                    is_riichi: false,
                },
                game: GameContext {
                    bakaze: Kaze::Ton,
                    aka_dora: AkaDora::default(),
                },
            }
        }
    }
}

/// # Yaku (Winning Hands)
///
/// The scoring patterns this engine recognizes, plus red-five bonus han.
pub mod yaku {
    use super::tiles::{Kaze, Sangenpai};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    /// Represents a single Yaku (or bonus Dora) awarded to a hand.
    pub enum Yaku {
        // --- 1 Han Yaku ---
        Tanyao,        // 断幺九 (All Simples)
        Pinfu,         // 平和 (All sequences, shape only)
        Iipeikou,      // 一盃口 (Pure Double Sequence)
        Riichi,        // 立直
        MenzenTsumo,   // 門前清自摸和 (Fully Concealed Hand)
        YakuhaiJikaze(Kaze),      // 役牌: 自風 (Seat Wind)
        YakuhaiBakaze(Kaze),      // 役牌: 場風 (Prevalent Wind)
        Yakuhai(Sangenpai),       // 役牌: 三元牌 (Dragon)

        // --- 2 Han Yaku ---
        DaburuKaze(Kaze), // ダブ風 (Seat and prevalent wind in one triplet)
        Chiitoitsu,       // 七対子 (Seven Pairs)
        Toitoi,           // 対々和 (All Triplets)
        SanshokuDoujun,   // 三色同順 (Mixed Triple Sequence)
        Ittsu,            // 一気通貫 (Pure Straight)

        // --- 3 Han Yaku ---
        Honitsu, // 混一色 (Half Flush)

        // --- 6 Han Yaku ---
        Chinitsu, // 清一色 (Full Flush)

        // --- Dora (Bonus Han, not Yaku) ---
        AkaDora, // 赤ドラ (Red Five Dora)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// A yaku together with the han it contributed to this hand.
    pub struct YakuEntry {
        pub yaku: Yaku,
        pub han: u8,
    }
}

/// # Scoring Results
///
/// This module defines the final output of a score calculation.
pub mod scoring {
    use super::hand::HandStructure;
    use super::yaku::YakuEntry;
    use serde::{Deserialize, Serialize};
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Represents the named point limits for high-scoring hands.
    pub enum HandLimit {
        Mangan,    // 満貫
        Haneman,   // 跳満
        Baiman,    // 倍満
        Sanbaiman, // 三倍満
        Yakuman,   // 役満 (13+ han)
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    /// Who pays what.
    pub enum Payment {
        /// The discarder pays everything.
        Ron { discarder: u32 },
        /// Dealer tsumo: each of the three others pays `each`.
        OyaTsumo { each: u32 },
        /// Non-dealer tsumo: the two non-dealers pay `ko`, the dealer `oya`.
        KoTsumo { ko: u32, oya: u32 },
    }

    impl Payment {
        pub fn total(&self) -> u32 {
            match *self {
                Payment::Ron { discarder } => discarder,
                Payment::OyaTsumo { each } => each * 3,
                Payment::KoTsumo { ko, oya } => ko * 2 + oya,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    /// Represents the complete scoring result for a winning hand.
    pub struct AgariResult {
        pub han: u8,                  // 飜 (Han count)
        pub fu: u8,                   // 符 (Fu count)
        pub yaku_list: Vec<YakuEntry>, // All yaku and red fives, in award order
        pub structure: HandStructure,

        /// The named limit, if one is reached.
        pub limit_name: Option<HandLimit>,

        pub payment: Payment,

        /// Total points received by the winner.
        pub total_payment: u32,
    }

    impl AgariResult {
        /// Zero awarded yaku. The engine still prices such a hand; callers
        /// decide whether to treat it as a valid win.
        pub fn has_no_yaku(&self) -> bool {
            self.yaku_list.iter().all(|e| matches!(e.yaku, super::yaku::Yaku::AkaDora))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    /// Outcome of an evaluation request.
    pub enum Evaluation {
        /// The hand does not hold exactly 14 tiles yet.
        Incomplete { tile_count: usize },
        Complete(AgariResult),
    }

    impl Evaluation {
        pub fn result(&self) -> Option<&AgariResult> {
            match self {
                Evaluation::Complete(r) => Some(r),
                Evaluation::Incomplete { .. } => None,
            }
        }
    }

    impl fmt::Display for HandLimit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                HandLimit::Mangan => "Mangan",
                HandLimit::Haneman => "Haneman",
                HandLimit::Baiman => "Baiman",
                HandLimit::Sanbaiman => "Sanbaiman",
                HandLimit::Yakuman => "Yakuman",
            };
            f.write_str(name)
        }
    }

    impl fmt::Display for Payment {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Payment::Ron { discarder } => write!(f, "Ron: discarder pays {}", discarder),
                Payment::OyaTsumo { each } => write!(f, "Dealer tsumo: {} from each of 3", each),
                Payment::KoTsumo { ko, oya } => {
                    write!(f, "Tsumo: {} from each non-dealer, {} from dealer", ko, oya)
                }
            }
        }
    }

    impl fmt::Display for AgariResult {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "Yaku:")?;
            if self.yaku_list.is_empty() {
                writeln!(f, "  (none)")?;
            }
            for entry in &self.yaku_list {
                writeln!(f, "  {:?} ({} han)", entry.yaku, entry.han)?;
            }
            writeln!(f, "{} han / {} fu", self.han, self.fu)?;
            writeln!(f, "{}", self.payment)?;
            match &self.limit_name {
                Some(limit) => write!(f, "Total: {} ({})", self.total_payment, limit),
                None => write!(f, "Total: {}", self.total_payment),
            }
        }
    }
}
