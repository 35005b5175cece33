//! RNG tests for cincuentazo-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - что shuffle() только переставляет карты
//! - воспроизводимость целой партии по seed

use std::collections::HashSet;

use cincuentazo_engine::domain::deck::Deck;
use cincuentazo_engine::domain::player::MachineStrategy;
use cincuentazo_engine::domain::SessionConfig;
use cincuentazo_engine::engine::{check_eliminations, take_turn_with, GameSession, RandomSource};
use cincuentazo_engine::infra::{DeterministicRng, SystemRng};

//
// TEST 1 - DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 - different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds should produce different order");
}

//
// TEST 3 - shuffle keeps every card exactly once
//
#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::standard_52();
    SystemRng.shuffle(&mut deck.cards);

    let unique: HashSet<_> = deck.cards.iter().copied().collect();
    assert_eq!(deck.len(), 52);
    assert_eq!(unique.len(), 52);
}

//
// TEST 4 - empty and single-element slices are fine
//
#[test]
fn shuffle_tiny_slices() {
    let mut rng = DeterministicRng::from_seed(1);
    let mut empty: Vec<u8> = Vec::new();
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![7u8];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![7]);
}

//
// TEST 5 - same seed replays the same game
//
#[test]
fn same_seed_replays_same_game() {
    let play = |seed: u64| {
        let mut s =
            GameSession::new(SessionConfig::new(2), DeterministicRng::from_seed(seed)).unwrap();
        for turn in 0..30u8 {
            if s.is_game_over() {
                break;
            }
            let id = turn % 3;
            if s.player(id).unwrap().eliminated {
                continue;
            }
            take_turn_with(&mut s, id, MachineStrategy::FirstPlayable).unwrap();
            check_eliminations(&mut s).unwrap();
        }
        s.history().clone()
    };

    assert_eq!(play(9), play(9));
}
