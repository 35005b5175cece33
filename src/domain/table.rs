use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Потолок суммы на столе.
pub const TABLE_LIMIT: i32 = 50;

/// Сыгранная карта вместе со значением, которое ей присвоили при розыгрыше.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayedCard {
    pub card: Card,
    pub value: i32,
}

/// Стол (сброс): история сыгранных карт и текущая сумма.
///
/// На столе всегда есть хотя бы одна карта - `top`, "текущая карта стола".
/// Сумма меняется только при розыгрыше (см. engine); при перетасовке
/// нижних карт обратно в колоду сумма НЕ пересчитывается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Карты под верхней, снизу вверх.
    under: Vec<PlayedCard>,
    top: PlayedCard,
    sum: i32,
}

impl Table {
    /// Стол с одной стартовой картой.
    pub fn with_starting_card(card: Card, value: i32) -> Self {
        Self {
            under: Vec::new(),
            top: PlayedCard { card, value },
            sum: value,
        }
    }

    /// Стол из готовой истории (снизу вверх). Сумма = сумма значений.
    /// `None` для пустой истории.
    pub fn from_history(mut history: Vec<PlayedCard>) -> Option<Self> {
        let top = history.pop()?;
        let sum = history.iter().map(|p| p.value).sum::<i32>() + top.value;
        Some(Self {
            under: history,
            top,
            sum,
        })
    }

    pub fn sum(&self) -> i32 {
        self.sum
    }

    pub fn top(&self) -> &PlayedCard {
        &self.top
    }

    pub fn top_card(&self) -> Card {
        self.top.card
    }

    /// История снизу вверх, верхняя карта последней.
    pub fn history(&self) -> impl Iterator<Item = &PlayedCard> {
        self.under.iter().chain(std::iter::once(&self.top))
    }

    pub fn len(&self) -> usize {
        self.under.len() + 1
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.history().any(|p| p.card == *card)
    }

    /// Положить карту сверху. Проверку лимита делает engine до вызова.
    pub fn place(&mut self, card: Card, value: i32) {
        let previous = std::mem::replace(&mut self.top, PlayedCard { card, value });
        self.under.push(previous);
        self.sum += value;
    }

    /// Забрать все карты, кроме верхней (для перетасовки в колоду).
    /// Сумма стола не меняется.
    pub fn recycle_under_top(&mut self) -> Vec<Card> {
        self.under.drain(..).map(|p| p.card).collect()
    }
}
