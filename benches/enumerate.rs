#[macro_use]
extern crate criterion;
extern crate hand_odds;

use criterion::Criterion;
use hand_odds::core::{Deck, Suit, Value};
use hand_odds::holdem::{Enumerator, Traversal};

fn short_deck() -> Deck {
    Deck::with_suits_and_values(
        &[Suit::Club, Suit::Heart],
        &[Value::Ace, Value::Ten, Value::Jack, Value::Queen, Value::King],
    )
    .unwrap()
}

fn combinations_short_deck(c: &mut Criterion) {
    let deck = short_deck();
    c.bench_function("Combination table over 10 cards", |b| {
        b.iter(|| Enumerator::new(&deck).build_table())
    });
}

fn paths_short_deck(c: &mut Criterion) {
    let deck = short_deck();
    let mut group = c.benchmark_group("paths");
    group.sample_size(10);
    group.bench_function("Path table over 10 cards", |b| {
        b.iter(|| {
            Enumerator::new(&deck)
                .with_traversal(Traversal::Paths)
                .build_table()
        })
    });
    group.finish();
}

criterion_group!(benches, combinations_short_deck, paths_short_deck);
criterion_main!(benches);
