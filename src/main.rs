use iced::widget::{button, column, container, radio, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length, Sandbox, Settings};
use log::debug;

use riichi_score::implements::calculate_agari;
use riichi_score::implements::game::{AgariContext, AgariType};
use riichi_score::implements::scoring::{AgariResult, Evaluation};
use riichi_score::implements::tiles::{
    tile_to_index, Hai, Jihai, Kaze, Sangenpai, Suhai, ALL_HAI, KAZE_ALL,
};
use riichi_score::implements::yaku::Yaku;
use riichi_score::implements::HAND_SIZE;

pub fn main() -> iced::Result {
    env_logger::init();
    ScorerApp::run(Settings::default())
}

/// Tile picker state. The hand is kept as counts, so it is always in
/// display order.
struct ScorerApp {
    counts: [u8; 34],
    context: AgariContext,
}

#[derive(Debug, Clone)]
enum Message {
    AddTile(usize),
    RemoveTile(usize),
    AddRed(Suhai),
    RemoveRed(Suhai),
    Clear,
    AgariTypeSelected(AgariType),
    ToggleOya,
    ToggleRiichi,
    JikazeSelected(Kaze),
    BakazeSelected(Kaze),
}

impl ScorerApp {
    fn total(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    fn can_add(&self, index: usize) -> bool {
        self.counts[index] < 4 && self.total() < HAND_SIZE
    }

    fn hand_tiles(&self) -> Vec<Hai> {
        ALL_HAI
            .iter()
            .flat_map(|tile| {
                std::iter::repeat(*tile).take(self.counts[tile_to_index(tile)] as usize)
            })
            .collect()
    }

    fn add_tile(&mut self, index: usize) {
        if self.can_add(index) {
            self.counts[index] += 1;
        }
    }

    /// Red fives never outnumber the fives left in the hand.
    fn remove_tile(&mut self, index: usize) {
        if self.counts[index] == 0 {
            return;
        }
        self.counts[index] -= 1;
        if let Hai::Suhai(5, suit) = ALL_HAI[index] {
            let red = self.context.game.aka_dora.get_mut(suit);
            *red = (*red).min(self.counts[index]);
        }
    }

    fn add_red(&mut self, suit: Suhai) {
        let fives = self.counts[tile_to_index(&Hai::Suhai(5, suit))];
        let red = self.context.game.aka_dora.get_mut(suit);
        if *red < fives {
            *red += 1;
        }
    }

    fn remove_red(&mut self, suit: Suhai) {
        let red = self.context.game.aka_dora.get_mut(suit);
        *red = red.saturating_sub(1);
    }

    fn tile_cell(&self, tile: Hai) -> Element<'_, Message> {
        let i = tile_to_index(&tile);
        let count = self.counts[i];

        let mut cell = column![
            text(tile_label(tile)).size(18),
            row![
                button(text("-")).on_press_maybe((count > 0).then_some(Message::RemoveTile(i))),
                text(count),
                button(text("+")).on_press_maybe(self.can_add(i).then_some(Message::AddTile(i))),
            ]
            .spacing(4)
            .align_items(Alignment::Center),
        ]
        .spacing(4)
        .align_items(Alignment::Center);

        if let Hai::Suhai(5, suit) = tile {
            let red = self.context.game.aka_dora.get(suit);
            cell = cell.push(
                row![
                    text("red").size(12),
                    button(text("-").size(12))
                        .on_press_maybe((red > 0).then_some(Message::RemoveRed(suit))),
                    text(red).size(12),
                    button(text("+").size(12))
                        .on_press_maybe((red < count).then_some(Message::AddRed(suit))),
                ]
                .spacing(4)
                .align_items(Alignment::Center),
            );
        }

        container(cell).padding(6).width(Length::Fixed(110.0)).into()
    }

    fn tile_picker(&self) -> Element<'_, Message> {
        let mut grid = Column::new().spacing(8);
        for chunk in ALL_HAI.chunks(9) {
            let mut line = Row::new().spacing(8);
            for tile in chunk {
                line = line.push(self.tile_cell(*tile));
            }
            grid = grid.push(line);
        }
        grid.into()
    }

    fn hand_bar(&self) -> Element<'_, Message> {
        let mut red_left = self.context.game.aka_dora;
        let mut bar = Row::new().spacing(4);
        for tile in self.hand_tiles() {
            let mut label = tile_label(tile);
            if let Hai::Suhai(5, suit) = tile {
                let red = red_left.get_mut(suit);
                if *red > 0 {
                    *red -= 1;
                    label = format!("{} (red)", label);
                }
            }
            let remove = Message::RemoveTile(tile_to_index(&tile));
            bar = bar.push(button(text(label).size(14)).on_press(remove));
        }

        column![
            row![
                text(format!("Selected: {} / {}", self.total(), HAND_SIZE)),
                button(text("Clear")).on_press(Message::Clear),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
            bar,
        ]
        .spacing(6)
        .into()
    }

    fn conditions(&self) -> Element<'_, Message> {
        let agari = self.context.agari_type;
        let player = self.context.player;

        let wind_row = |selected: Kaze, on_select: fn(Kaze) -> Message| {
            KAZE_ALL.iter().fold(Row::new().spacing(10), |r, &k| {
                r.push(radio(k.to_string(), k, Some(selected), on_select))
            })
        };

        column![
            text("Conditions").size(20),
            row![
                radio("Ron", AgariType::Ron, Some(agari), Message::AgariTypeSelected),
                radio("Tsumo", AgariType::Tsumo, Some(agari), Message::AgariTypeSelected),
            ]
            .spacing(12),
            row![
                button(text(format!("Dealer: {}", yes_no(player.is_oya))))
                    .on_press(Message::ToggleOya),
                button(text(format!("Riichi: {}", yes_no(player.is_riichi))))
                    .on_press(Message::ToggleRiichi),
            ]
            .spacing(12),
            row![
                text("Round wind"),
                wind_row(self.context.game.bakaze, Message::BakazeSelected)
            ]
            .spacing(12),
            row![text("Seat wind"), wind_row(player.jikaze, Message::JikazeSelected)].spacing(12),
        ]
        .spacing(8)
        .into()
    }

    fn result_panel(&self) -> Element<'_, Message> {
        let body = match calculate_agari(&self.hand_tiles(), &self.context) {
            Ok(Evaluation::Incomplete { .. }) => {
                Column::new().push(text(format!("Pick {} tiles to score the hand.", HAND_SIZE)))
            }
            Ok(Evaluation::Complete(result)) => result_lines(&result),
            Err(e) => Column::new().push(text(e.to_string())),
        };
        container(column![text("Result").size(20), body.spacing(4)].spacing(6))
            .padding(10)
            .into()
    }
}

impl Sandbox for ScorerApp {
    type Message = Message;

    fn new() -> Self {
        ScorerApp {
            counts: [0; 34],
            context: AgariContext::default(),
        }
    }

    fn title(&self) -> String {
        String::from("Riichi Score Calculator")
    }

    fn update(&mut self, message: Message) {
        debug!("{:?}", message);
        match message {
            Message::AddTile(i) => self.add_tile(i),
            Message::RemoveTile(i) => self.remove_tile(i),
            Message::AddRed(suit) => self.add_red(suit),
            Message::RemoveRed(suit) => self.remove_red(suit),
            Message::Clear => {
                self.counts = [0; 34];
                self.context.game.aka_dora = Default::default();
            }
            Message::AgariTypeSelected(agari_type) => self.context.agari_type = agari_type,
            Message::ToggleOya => self.context.player.is_oya = !self.context.player.is_oya,
            Message::ToggleRiichi => self.context.player.is_riichi = !self.context.player.is_riichi,
            Message::JikazeSelected(k) => self.context.player.jikaze = k,
            Message::BakazeSelected(k) => self.context.game.bakaze = k,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            text("Riichi Mahjong Score Calculator").size(26),
            self.tile_picker(),
            self.hand_bar(),
            self.conditions(),
            self.result_panel(),
        ]
        .spacing(16)
        .padding(16);

        scrollable(container(content).width(Length::Fill)).into()
    }
}

fn result_lines<'a>(result: &AgariResult) -> Column<'a, Message> {
    let yaku = if result.yaku_list.is_empty() {
        String::from("(no yaku)")
    } else {
        result
            .yaku_list
            .iter()
            .map(|e| format!("{} ({} han)", yaku_label(e.yaku), e.han))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let total = match result.limit_name {
        Some(limit) => format!("Total: {} points [{}]", result.total_payment, limit),
        None => format!("Total: {} points", result.total_payment),
    };

    column![
        text(format!("Yaku: {}", yaku)),
        text(format!("Han: {}", result.han)),
        text(format!("Fu: {}", result.fu)),
        text(format!("Payment: {}", result.payment)),
        text(total).size(18),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn tile_label(tile: Hai) -> String {
    match tile {
        Hai::Suhai(..) => tile.to_string(),
        Hai::Jihai(Jihai::Kaze(k)) => k.to_string(),
        Hai::Jihai(Jihai::Sangen(Sangenpai::Haku)) => String::from("Haku"),
        Hai::Jihai(Jihai::Sangen(Sangenpai::Hatsu)) => String::from("Hatsu"),
        Hai::Jihai(Jihai::Sangen(Sangenpai::Chun)) => String::from("Chun"),
    }
}

fn yaku_label(yaku: Yaku) -> String {
    match yaku {
        Yaku::Tanyao => "Tanyao".into(),
        Yaku::Pinfu => "Pinfu".into(),
        Yaku::Iipeikou => "Iipeikou".into(),
        Yaku::Riichi => "Riichi".into(),
        Yaku::MenzenTsumo => "Menzen Tsumo".into(),
        Yaku::YakuhaiJikaze(k) => format!("Seat wind ({})", k),
        Yaku::YakuhaiBakaze(k) => format!("Round wind ({})", k),
        Yaku::Yakuhai(s) => format!("Yakuhai ({})", tile_label(Hai::from(s))),
        Yaku::DaburuKaze(k) => format!("Double wind ({})", k),
        Yaku::Chiitoitsu => "Chiitoitsu".into(),
        Yaku::Toitoi => "Toitoi".into(),
        Yaku::SanshokuDoujun => "Sanshoku Doujun".into(),
        Yaku::Ittsu => "Ittsu".into(),
        Yaku::Honitsu => "Honitsu".into(),
        Yaku::Chinitsu => "Chinitsu".into(),
        Yaku::AkaDora => "Red fives".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five(suit: Suhai) -> usize {
        tile_to_index(&Hai::Suhai(5, suit))
    }

    #[test]
    fn adding_stops_at_four_copies() {
        let mut app = ScorerApp::new();
        for _ in 0..6 {
            app.add_tile(0);
        }
        assert_eq!(app.counts[0], 4);
    }

    #[test]
    fn adding_stops_at_fourteen_tiles() {
        let mut app = ScorerApp::new();
        for i in 0..20 {
            app.add_tile(i);
        }
        assert_eq!(app.total(), HAND_SIZE);
        assert_eq!(app.hand_tiles().len(), HAND_SIZE);
    }

    #[test]
    fn red_count_follows_fives() {
        let mut app = ScorerApp::new();
        let i = five(Suhai::Pinzu);
        app.add_tile(i);
        app.add_tile(i);
        app.add_red(Suhai::Pinzu);
        app.add_red(Suhai::Pinzu);
        app.add_red(Suhai::Pinzu);
        assert_eq!(app.context.game.aka_dora.pinzu, 2);

        app.remove_tile(i);
        assert_eq!(app.context.game.aka_dora.pinzu, 1);
        app.remove_tile(i);
        assert_eq!(app.context.game.aka_dora.pinzu, 0);
    }

    #[test]
    fn clear_resets_hand_and_red_fives() {
        let mut app = ScorerApp::new();
        let i = five(Suhai::Souzu);
        app.update(Message::AddTile(i));
        app.update(Message::AddRed(Suhai::Souzu));
        app.update(Message::Clear);
        assert_eq!(app.total(), 0);
        assert_eq!(app.context.game.aka_dora.total(), 0);
    }

    #[test]
    fn hand_tiles_in_display_order() {
        let mut app = ScorerApp::new();
        app.add_tile(33);
        app.add_tile(0);
        app.add_tile(10);
        let labels: Vec<String> = app.hand_tiles().iter().map(|t| t.to_string()).collect();
        assert_eq!(labels, vec!["1m", "2p", "7z"]);
    }
}
