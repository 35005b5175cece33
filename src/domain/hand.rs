use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Сколько карт держит игрок при обычной игре.
pub const HAND_SIZE: usize = 4;

/// Рука игрока: упорядоченное мультимножество карт.
/// Порядок = порядок получения (важен для AI: он перебирает руку слева направо).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Рука добрана до нормы - тянуть больше нельзя.
    pub fn is_full(&self) -> bool {
        self.cards.len() >= HAND_SIZE
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Убрать первое вхождение карты. `false`, если карты в руке нет.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.cards.iter().position(|c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Забрать все карты (рука становится пустой).
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
