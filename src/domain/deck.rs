use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Размер полного каталога карт.
pub const DECK_SIZE: usize = 52;

/// Колода (прикуп). Верх колоды - конец вектора.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Полный каталог из 52 карт в порядке:
    /// Clubs A..K, Diamonds A..K, Hearts A..K, Spades A..K.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Верхняя карта (без изъятия).
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Вернуть карты на дно колоды (порядок сохраняется).
    /// Перемешать после этого - решение вызывающего.
    pub fn put_back(&mut self, cards: impl IntoIterator<Item = Card>) {
        let returned: Vec<Card> = cards.into_iter().collect();
        self.cards.splice(0..0, returned);
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}
