use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём UI / драйверу).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неверный конфиг партии (например, 0 или 4 машины).
    Configuration(String),

    /// Ход не может быть сделан: чужая карта, перебор 50, туз без выбора.
    InvalidPlay(String),

    /// Неверный выбор значения туза.
    InvalidChoice(String),

    /// Колода пуста и со стола нечего переложить.
    DeckEmpty,

    /// Игрока с таким id нет за столом.
    PlayerNotFound(PlayerId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Configuration(msg) => ApiError::Configuration(msg),
            EngineError::InvalidPlay(reason) => ApiError::InvalidPlay(reason.to_string()),
            EngineError::InvalidChoice(msg) => ApiError::InvalidChoice(msg),
            EngineError::DeckEmpty => ApiError::DeckEmpty,
            EngineError::PlayerNotFound(id) => ApiError::PlayerNotFound(id),
            e @ (EngineError::PlayerEliminated(_) | EngineError::NotMachine(_)) => {
                ApiError::InvalidCommand(e.to_string())
            }
        }
    }
}
