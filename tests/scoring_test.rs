//! End-to-end scoring through `calculate_agari`.

use riichi_score::implements::game::{AgariContext, AgariType, AkaDora};
use riichi_score::implements::hand::HandStructure;
use riichi_score::implements::parser::parse_hand;
use riichi_score::implements::scoring::{AgariResult, Evaluation, HandLimit, Payment};
use riichi_score::implements::tiles::{Hai, Kaze, Sangenpai, Suhai};
use riichi_score::implements::yaku::Yaku;
use riichi_score::implements::{calculate_agari, AgariError};

fn score(text: &str, context: &AgariContext) -> AgariResult {
    let hand = parse_hand(text).unwrap();
    match calculate_agari(&hand.tiles, context).unwrap() {
        Evaluation::Complete(result) => result,
        other => panic!("expected a complete hand, got {:?}", other),
    }
}

fn yaku_names(result: &AgariResult) -> Vec<Yaku> {
    result.yaku_list.iter().map(|e| e.yaku).collect()
}

#[test]
fn tanyao_pinfu_ron_non_dealer() {
    let result = score("234m567m345p678p44s", &AgariContext::default());
    assert_eq!(yaku_names(&result), vec![Yaku::Tanyao, Yaku::Pinfu]);
    assert_eq!(result.han, 2);
    assert_eq!(result.fu, 30);
    assert_eq!(result.payment, Payment::Ron { discarder: 2000 });
    assert_eq!(result.total_payment, 2000);
    assert_eq!(result.limit_name, None);
}

#[test]
fn tanyao_pinfu_tsumo_dealer() {
    let context = AgariContext {
        agari_type: AgariType::Tsumo,
        player: riichi_score::implements::game::PlayerContext {
            jikaze: Kaze::Ton,
            is_oya: true,
            is_riichi: false,
        },
        ..AgariContext::default()
    };
    let result = score("234m567m345p678p44s", &context);
    assert_eq!(
        yaku_names(&result),
        vec![Yaku::Tanyao, Yaku::Pinfu, Yaku::MenzenTsumo]
    );
    assert_eq!(result.han, 3);
    assert_eq!(result.fu, 20);
    assert_eq!(result.payment, Payment::OyaTsumo { each: 1300 });
    assert_eq!(result.total_payment, 3900);
}

#[test]
fn seven_pairs_ron_non_dealer() {
    let result = score("1199m1199p11s2255z", &AgariContext::default());
    assert_eq!(yaku_names(&result), vec![Yaku::Chiitoitsu]);
    assert_eq!(result.han, 2);
    assert_eq!(result.fu, 25);
    assert_eq!(result.total_payment, 1600);
    assert!(matches!(result.structure, HandStructure::Chiitoitsu { .. }));
}

#[test]
fn stacked_value_triplets_reach_yakuman() {
    let mut context = AgariContext::default();
    context.player.is_riichi = true;
    context.game.aka_dora = AkaDora {
        manzu: 2,
        pinzu: 0,
        souzu: 0,
    };
    let result = score("55m111z555z666z777z", &context);
    assert_eq!(
        yaku_names(&result),
        vec![
            Yaku::Riichi,
            Yaku::Toitoi,
            Yaku::Honitsu,
            Yaku::DaburuKaze(Kaze::Ton),
            Yaku::Yakuhai(Sangenpai::Haku),
            Yaku::Yakuhai(Sangenpai::Hatsu),
            Yaku::Yakuhai(Sangenpai::Chun),
            Yaku::AkaDora,
        ]
    );
    assert_eq!(result.han, 13);
    assert_eq!(result.limit_name, Some(HandLimit::Yakuman));
    assert_eq!(result.total_payment, 32000);
}

#[test]
fn non_dealer_tsumo_split() {
    let mut context = AgariContext::default();
    context.agari_type = AgariType::Tsumo;
    context.player.is_riichi = true;
    // Riichi + Tsumo + Tanyao + Pinfu, 20 fu: 1280 basic points
    let result = score("234m567m345p678p44s", &context);
    assert_eq!(result.han, 4);
    assert_eq!(result.fu, 20);
    assert_eq!(result.payment, Payment::KoTsumo { ko: 1300, oya: 2600 });
    assert_eq!(result.total_payment, 5200);
}

#[test]
fn terminal_triplets_drive_fu() {
    let mut context = AgariContext::default();
    context.player.jikaze = Kaze::Nan;
    context.game.bakaze = Kaze::Nan;
    // East is not a value wind here; the Haku pair is.
    let result = score("111z999m111p999p55z", &context);
    assert_eq!(yaku_names(&result), vec![Yaku::Toitoi]);
    // 20 + 10 + 2 + 4 * 8 = 64 -> 70 fu; 2 han 70 fu = 1120 basic
    assert_eq!(result.fu, 70);
    assert_eq!(result.total_payment, 4500);
}

#[test]
fn large_fu_caps_at_mangan() {
    let mut context = AgariContext::default();
    context.player.jikaze = Kaze::Nan;
    context.game.bakaze = Kaze::Nan;
    context.player.is_riichi = true;
    context.game.aka_dora.pinzu = 1;
    // Riichi + Toitoi + red five = 4 han; 20 + 10 + 3 * 8 + 4 = 58 -> 60 fu
    let result = score("111z999m555p999p11s", &context);
    assert_eq!(result.han, 4);
    assert_eq!(result.fu, 60);
    assert_eq!(result.limit_name, Some(HandLimit::Mangan));
    assert_eq!(result.total_payment, 8000);
}

#[test]
fn full_flush_is_haneman() {
    let result = score("11123455678999s", &AgariContext::default());
    assert!(yaku_names(&result).contains(&Yaku::Chinitsu));
    assert!(result.han >= 6);
    assert_eq!(result.limit_name, Some(HandLimit::Haneman));
    assert_eq!(result.total_payment, 12000);
}

#[test]
fn zero_yaku_hand_is_still_priced() {
    let result = score("1357m2468p1357s11z", &AgariContext::default());
    assert!(result.yaku_list.is_empty());
    assert!(result.has_no_yaku());
    assert_eq!(result.structure, HandStructure::Irregular);
    assert_eq!(result.han, 0);
    assert_eq!(result.fu, 30);
    // 30 * 4 = 120 basic, ron x4 = 480 -> 500
    assert_eq!(result.total_payment, 500);
}

#[test]
fn red_fives_on_a_yakuless_hand() {
    let mut context = AgariContext::default();
    context.game.aka_dora.pinzu = 1;
    let result = score("1357m2458p1357s11z", &context);
    assert_eq!(yaku_names(&result), vec![Yaku::AkaDora]);
    assert!(result.has_no_yaku());
    assert_eq!(result.han, 1);
}

#[test]
fn short_and_long_hands_are_incomplete() {
    let context = AgariContext::default();
    let hand = parse_hand("234m567m345p678p4s").unwrap();
    assert_eq!(
        calculate_agari(&hand.tiles, &context),
        Ok(Evaluation::Incomplete { tile_count: 13 })
    );
    let hand = parse_hand("234m567m345p678p444s").unwrap();
    assert_eq!(
        calculate_agari(&hand.tiles, &context),
        Ok(Evaluation::Incomplete { tile_count: 15 })
    );
    assert_eq!(
        calculate_agari(&[], &context),
        Ok(Evaluation::Incomplete { tile_count: 0 })
    );
}

#[test]
fn malformed_input_is_an_error() {
    let mut context = AgariContext::default();
    context.game.aka_dora.souzu = 1;
    let hand = parse_hand("234m567m345p678p44s").unwrap();
    assert!(matches!(
        calculate_agari(&hand.tiles, &context),
        Err(AgariError::AkaDoraExceedsFives { .. })
    ));
}

#[test]
fn short_hand_with_red_five_declared_is_incomplete() {
    let mut context = AgariContext::default();
    context.game.aka_dora.manzu = 1;
    let hand = parse_hand("234m678m345p678p4s").unwrap();
    assert_eq!(
        calculate_agari(&hand.tiles, &context),
        Ok(Evaluation::Incomplete { tile_count: 13 })
    );
}

#[test]
fn oversized_input_is_an_error() {
    let tiles = vec![Hai::Suhai(1, Suhai::Manzu); 256];
    assert_eq!(
        calculate_agari(&tiles, &AgariContext::default()),
        Err(AgariError::TooManyCopies {
            tile: Hai::Suhai(1, Suhai::Manzu),
            count: 5
        })
    );
}

#[test]
fn seven_pairs_with_sequence_shape() {
    // 112233m 445566p 77s also reads as four runs plus a pair
    let result = score("112233m445566p77s", &AgariContext::default());
    assert_eq!(
        yaku_names(&result),
        vec![Yaku::Pinfu, Yaku::Iipeikou, Yaku::Chiitoitsu]
    );
    assert_eq!(result.han, 4);
    assert_eq!(result.fu, 25);
    // 25 * 64 = 1600 basic, ron x4 = 6400
    assert_eq!(result.total_payment, 6400);
}

#[test]
fn red_five_notation_feeds_the_context() {
    let hand = parse_hand("234m067m345p678p44s").unwrap();
    let context = AgariContext {
        game: riichi_score::implements::game::GameContext {
            bakaze: Kaze::Ton,
            aka_dora: hand.aka_dora,
        },
        ..AgariContext::default()
    };
    let result = score("234m567m345p678p44s", &context);
    assert_eq!(result.han, 3);
    // 3 han 30 fu: 960 basic, ron x4 = 3840 -> 3900
    assert_eq!(result.total_payment, 3900);
}

#[test]
fn evaluation_is_deterministic() {
    let mut context = AgariContext::default();
    context.agari_type = AgariType::Tsumo;
    let hand = parse_hand("111222333m456p99s").unwrap();
    let first = calculate_agari(&hand.tiles, &context).unwrap();
    let second = calculate_agari(&hand.tiles, &context).unwrap();
    assert_eq!(first, second);
}

#[test]
fn result_serializes_with_stable_identifiers() {
    let result = score("234m567m345p678p44s", &AgariContext::default());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["han"], 2);
    assert_eq!(json["fu"], 30);
    assert_eq!(json["yaku_list"][0]["yaku"], "Tanyao");
    assert_eq!(json["payment"]["Ron"]["discarder"], 2000);

    let back: AgariResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
