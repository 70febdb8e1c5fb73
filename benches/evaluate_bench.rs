use criterion::{black_box, criterion_group, criterion_main, Criterion};
use riichi_score::implements::game::{AgariContext, AgariType};
use riichi_score::implements::parser::parse_hand;
use riichi_score::implements::tiles::Hai;
use riichi_score::implements::{calculate_agari, calculate_basic_points, count_tiles, organize_hand};

fn tiles(text: &str) -> Vec<Hai> {
    parse_hand(text).map(|h| h.tiles).unwrap_or_default()
}

fn bench_organize_hand(c: &mut Criterion) {
    // Needs backtracking over several pair candidates
    let chinitsu = count_tiles(&tiles("11123455678999s"));
    let chiitoi = count_tiles(&tiles("1199m1199p11s2255z"));
    let irregular = count_tiles(&tiles("1357m2468p1357s11z"));

    c.bench_function("organize_chinitsu", |b| {
        b.iter(|| black_box(organize_hand(black_box(&chinitsu))));
    });
    c.bench_function("organize_chiitoitsu", |b| {
        b.iter(|| black_box(organize_hand(black_box(&chiitoi))));
    });
    c.bench_function("organize_irregular", |b| {
        b.iter(|| black_box(organize_hand(black_box(&irregular))));
    });
}

fn bench_calculate_agari(c: &mut Criterion) {
    let hands = [
        tiles("234m567m345p678p44s"),
        tiles("55m111z555z666z777z"),
        tiles("123456789p11122z"),
        tiles("223344m567p678s55p"),
    ];
    let context = AgariContext {
        agari_type: AgariType::Tsumo,
        ..AgariContext::default()
    };

    c.bench_function("calculate_agari_mixed", |b| {
        b.iter(|| {
            for hand in &hands {
                let _ = black_box(calculate_agari(black_box(hand), black_box(&context)));
            }
        });
    });
}

fn bench_basic_points(c: &mut Criterion) {
    c.bench_function("basic_points_all_tiers", |b| {
        b.iter(|| {
            for han in 0..=13u8 {
                for fu in [20u8, 25, 30, 40, 70, 110] {
                    black_box(calculate_basic_points(black_box(han), black_box(fu)));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_organize_hand,
    bench_calculate_agari,
    bench_basic_points,
);
criterion_main!(benches);
