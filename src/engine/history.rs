use serde::{Deserialize, Serialize};

use crate::domain::card::{AceValue, Card};
use crate::domain::PlayerId;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Партия началась: карты розданы, стартовая карта открыта.
    SessionStarted {
        players: u8,
        starting_card: Card,
        table_sum: i32,
    },

    /// Для туза выбрано значение (ещё не сыгран).
    AceValueChosen { card: Card, value: AceValue },

    /// Карта сыграна на стол.
    CardPlayed {
        player_id: PlayerId,
        card: Card,
        value: i32,
        table_sum: i32,
    },

    /// Игрок взял карту из колоды.
    CardDrawn { player_id: PlayerId, card: Card },

    /// Колода пополнена картами со стола (кроме верхней).
    DeckReshuffled { recycled: usize },

    /// Игрок выбыл, его карты вернулись в колоду.
    PlayerEliminated {
        player_id: PlayerId,
        returned_cards: usize,
    },

    /// Осталось не больше одного активного игрока.
    GameFinished { winner: Option<PlayerId> },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии (только добавление).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }
}
