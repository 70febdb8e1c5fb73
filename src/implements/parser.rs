//! Compact hand notation: digits followed by a suit letter, e.g.
//! `234m567m345p678p44s`. `m`/`p`/`s` are the numbered suits, `z` the
//! honors (`1z`-`4z` East South West North, `5z`-`7z` Haku Hatsu Chun).
//! A `0` in a numbered suit is a red five.

use super::errors::{AgariError, CalcResult};
use super::types::{
    game::AkaDora,
    tiles::{index_to_tile, Hai, Suhai},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHand {
    pub tiles: Vec<Hai>,
    pub aka_dora: AkaDora,
}

fn parse_error(input: &str, message: impl Into<String>) -> AgariError {
    AgariError::Parse {
        input: input.to_string(),
        message: message.into(),
    }
}

pub fn parse_hand(text: &str) -> CalcResult<ParsedHand> {
    let mut tiles = Vec::new();
    let mut aka_dora = AkaDora::default();
    let mut pending_digits: Vec<u8> = Vec::new();

    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            pending_digits.push(d as u8);
            continue;
        }
        let suhai = match c {
            'm' => Some(Suhai::Manzu),
            'p' => Some(Suhai::Pinzu),
            's' => Some(Suhai::Souzu),
            'z' => None,
            c if c.is_whitespace() => continue,
            other => return Err(parse_error(text, format!("unexpected character '{}'", other))),
        };
        if pending_digits.is_empty() {
            return Err(parse_error(text, format!("suit '{}' without digits", c)));
        }
        for &d in &pending_digits {
            let tile = match suhai {
                Some(suit) if d == 0 => {
                    *aka_dora.get_mut(suit) += 1;
                    Hai::Suhai(5, suit)
                }
                Some(suit) => Hai::Suhai(d, suit),
                None if (1..=7).contains(&d) => index_to_tile(26 + d as usize),
                None => return Err(parse_error(text, format!("no honor tile {}z", d))),
            };
            tiles.push(tile);
        }
        pending_digits.clear();
    }

    if !pending_digits.is_empty() {
        return Err(parse_error(text, "pending digits without suit"));
    }

    Ok(ParsedHand { tiles, aka_dora })
}
