use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlayerId;

/// Почему розыгрыш карты отклонён.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Error)]
pub enum InvalidPlayReason {
    #[error("card is not in the player's hand")]
    CardNotInHand,

    #[error("exceeds 50: table sum {sum} + card value {value}")]
    ExceedsLimit { sum: i32, value: i32 },

    #[error("ace value not chosen")]
    AceValueNotChosen,
}

/// Ошибки движка Cincuentazo.
///
/// Любая ошибка означает, что состояние партии не изменилось.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("invalid play: {0}")]
    InvalidPlay(InvalidPlayReason),

    #[error("invalid ace choice: {0}")]
    InvalidChoice(String),

    #[error("deck is empty and there is nothing on the table to recycle")]
    DeckEmpty,

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("player {0} is eliminated")]
    PlayerEliminated(PlayerId),

    #[error("player {0} is not a machine player")]
    NotMachine(PlayerId),
}

impl From<InvalidPlayReason> for EngineError {
    fn from(reason: InvalidPlayReason) -> Self {
        EngineError::InvalidPlay(reason)
    }
}
