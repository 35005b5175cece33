//! Общие утилиты для интеграционных тестов.
#![allow(dead_code)]

use std::collections::HashSet;

use cincuentazo_engine::domain::{Card, Deck, PlayedCard, Rank, DECK_SIZE};
use cincuentazo_engine::engine::{GameSession, RandomSource, SessionLayout};

/// RNG, который ничего не тасует: колода остаётся в порядке каталога.
#[derive(Clone, Debug, Default)]
pub struct NoShuffle;

impl RandomSource for NoShuffle {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

/// Карта из строки вида "Ah", "Td", "7c".
pub fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

pub fn cards(list: &[&str]) -> Vec<Card> {
    list.iter().map(|s| c(s)).collect()
}

/// Карта на столе с базовым значением (туз = 1).
pub fn played(s: &str) -> PlayedCard {
    let card = c(s);
    PlayedCard {
        card,
        value: base_points(&card),
    }
}

pub fn played_as(s: &str, value: i32) -> PlayedCard {
    PlayedCard { card: c(s), value }
}

fn base_points(card: &Card) -> i32 {
    match card.rank {
        Rank::Ace => 1,
        Rank::Jack | Rank::Queen | Rank::King => -10,
        r => r as i32,
    }
}

/// Раскладка: заданные руки и стол, всё остальное - в колоде.
/// `deck_top[0]` тянется первой.
pub fn layout(hands: &[&[&str]], table: &[PlayedCard], deck_top: &[&str]) -> SessionLayout {
    let hands: Vec<Vec<Card>> = hands.iter().map(|h| cards(h)).collect();
    let top = cards(deck_top);

    let used: HashSet<Card> = hands
        .iter()
        .flatten()
        .copied()
        .chain(table.iter().map(|p| p.card))
        .chain(top.iter().copied())
        .collect();

    let mut deck: Vec<Card> = Deck::standard_52()
        .cards
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();
    deck.extend(top.into_iter().rev());

    SessionLayout {
        deck,
        hands,
        table: table.to_vec(),
    }
}

/// Раскладка с пустой колодой: всё, что не в руках, лежит на столе
/// (в порядке каталога), `top` - верхняя карта стола.
pub fn layout_rest_on_table(hands: &[&[&str]], top: &str) -> SessionLayout {
    let hands: Vec<Vec<Card>> = hands.iter().map(|h| cards(h)).collect();
    let top = c(top);

    let mut table: Vec<PlayedCard> = Deck::standard_52()
        .cards
        .into_iter()
        .filter(|card| *card != top && !hands.iter().flatten().any(|h| h == card))
        .map(|card| PlayedCard {
            card,
            value: base_points(&card),
        })
        .collect();
    table.push(PlayedCard {
        card: top,
        value: base_points(&top),
    });

    SessionLayout {
        deck: Vec::new(),
        hands,
        table,
    }
}

/// Все карты партии: колода + руки + стол.
pub fn all_cards<R: RandomSource>(session: &GameSession<R>) -> Vec<Card> {
    session
        .deck()
        .cards
        .iter()
        .copied()
        .chain(session.players().iter().flat_map(|p| p.cards().iter().copied()))
        .chain(session.table().history().map(|p| p.card))
        .collect()
}

/// Инвариант сохранения: ровно 52 разные карты.
pub fn assert_conserved<R: RandomSource>(session: &GameSession<R>) {
    let all = all_cards(session);
    let unique: HashSet<Card> = all.iter().copied().collect();
    assert_eq!(all.len(), DECK_SIZE, "card count must stay 52");
    assert_eq!(unique.len(), DECK_SIZE, "no card may be in two places");
}
