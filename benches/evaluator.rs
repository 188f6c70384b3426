use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use uth_rs::cards::parse_cards;
use uth_rs::evaluator::{best_hand, evaluate_five};
use uth_rs::payout::{resolve, Wagers};

fn five(s: &str) -> [uth_rs::cards::Card; 5] {
    let cards = parse_cards(s).unwrap();
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

fn bench_evaluate_five(c: &mut Criterion) {
    let mut g = c.benchmark_group("evaluate_five");
    for (name, hand) in [
        ("high_card", "Ah Kd 7s 5c 2d"),
        ("wheel", "Ac 2d 3h 4s 5c"),
        ("full_house", "9h 9d 9c 4s 4d"),
        ("royal", "As Ks Qs Js Ts"),
    ] {
        let input = five(hand);
        g.bench_with_input(BenchmarkId::new(name, hand), &input, |b, input| {
            b.iter(|| evaluate_five(black_box(input)))
        });
    }
    g.finish();
}

fn bench_best_hand(c: &mut Criterion) {
    let seven = parse_cards("As Ah Ks Qs Js Ts 9s").unwrap();
    c.bench_function("best_hand_seven", |b| b.iter(|| best_hand(black_box(&seven))));
}

fn bench_resolve(c: &mut Criterion) {
    let player = best_hand(&parse_cards("As Ah Ks Qs Js Ts 9s").unwrap()).unwrap();
    let dealer = best_hand(&parse_cards("2c 2d 7s 9h Kd 3c 4h").unwrap()).unwrap();
    let wagers = Wagers::new(10, 10, 40);
    c.bench_function("resolve", |b| {
        b.iter(|| resolve(black_box(&player), black_box(&dealer), true, wagers))
    });
}

criterion_group!(benches, bench_evaluate_five, bench_best_hand, bench_resolve);
criterion_main!(benches);
