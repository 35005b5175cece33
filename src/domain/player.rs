use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Hand;
use crate::domain::PlayerId;

/// Стратегия выбора карты для машинного игрока.
/// Сам выбор реализован в `engine::strategy`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MachineStrategy {
    /// Первая карта руки (слева направо), которая не выводит сумму за 50.
    /// Тузы при переборе считаются за 1.
    #[default]
    FirstPlayable,
}

/// Кто управляет игроком.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerKind {
    /// Ходы приходят извне (UI).
    Human,
    /// Ходы выбирает стратегия.
    Machine(MachineStrategy),
}

/// Игрок за столом. Пассивный держатель данных:
/// мутирует его только `GameSession`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub kind: PlayerKind,
    pub hand: Hand,
    /// Выставляется один раз при выбывании и больше не сбрасывается.
    pub eliminated: bool,
}

impl Player {
    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self::new(id, name, PlayerKind::Human)
    }

    pub fn machine(id: PlayerId, name: impl Into<String>, strategy: MachineStrategy) -> Self {
        Self::new(id, name, PlayerKind::Machine(strategy))
    }

    fn new(id: PlayerId, name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            hand: Hand::new(),
            eliminated: false,
        }
    }

    pub fn is_machine(&self) -> bool {
        matches!(self.kind, PlayerKind::Machine(_))
    }

    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }
}
