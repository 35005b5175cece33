use crate::domain::card::{AceValue, Card};
use crate::domain::player::MachineStrategy;
use crate::domain::table::TABLE_LIMIT;
use crate::engine::validation::chosen_value;

/// Выбор стратегии: какую карту играть и (для туза) за сколько.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardChoice {
    pub card: Card,
    /// `Some` только для туза.
    pub ace_value: Option<AceValue>,
}

impl MachineStrategy {
    /// Выбрать карту для хода или `None` (пас).
    pub fn select_card_to_play(&self, hand: &[Card], table_sum: i32) -> Option<CardChoice> {
        match self {
            MachineStrategy::FirstPlayable => first_playable(hand, table_sum),
        }
    }
}

/// Первая карта слева, которая держит сумму <= 50. Туз всегда за 1.
fn first_playable(hand: &[Card], table_sum: i32) -> Option<CardChoice> {
    hand.iter().find_map(|card| {
        let ace_value = card.is_ace().then_some(AceValue::One);
        let value = chosen_value(card, ace_value)?;
        (table_sum + value <= TABLE_LIMIT).then_some(CardChoice {
            card: *card,
            ace_value,
        })
    })
}
