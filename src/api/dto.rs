use serde::{Deserialize, Serialize};

use crate::domain::card::{AceValue, Card};
use crate::domain::PlayerId;
use crate::engine::{DrawOutcome, GameEvent, MachineTurn, TableState};

/// DTO игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub player_id: PlayerId,
    pub display_name: String,
    pub is_machine: bool,
    pub eliminated: bool,
    pub hand_size: usize,
    /// Карты руки – только для "героя" (остальным видны рубашки).
    pub hand: Option<Vec<Card>>,
}

/// DTO стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStateDto {
    pub top_card: Card,
    pub table_sum: i32,
    pub table_cards: usize,
}

impl From<TableState> for TableStateDto {
    fn from(s: TableState) -> Self {
        Self {
            top_card: s.top_card,
            table_sum: s.table_sum,
            table_cards: s.table_cards,
        }
    }
}

/// DTO руки после добора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandStateDto {
    pub player_id: PlayerId,
    pub hand: Vec<Card>,
    pub drawn: Option<Card>,
    pub reshuffled: bool,
    pub deck_size: usize,
}

impl HandStateDto {
    pub fn from_outcome(
        player_id: PlayerId,
        hand: Vec<Card>,
        outcome: DrawOutcome,
        deck_size: usize,
    ) -> Self {
        Self {
            player_id,
            hand,
            drawn: outcome.drawn,
            reshuffled: outcome.reshuffled,
            deck_size,
        }
    }
}

/// Полный вид партии для отрисовки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub current_table_card: Card,
    pub table_sum: i32,
    pub deck_size: usize,
    pub players: Vec<PlayerViewDto>,
    pub eliminated: Vec<PlayerId>,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешный результат без доп.данных.
    Ok,
    Table(TableStateDto),
    Hand(HandStateDto),
    AceChosen { card: Card, value: AceValue },
    MachineTurn(MachineTurn),
    Eliminated(Vec<PlayerId>),
}

/// История партии для реплеера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryDto {
    pub events: Vec<GameEvent>,
}
