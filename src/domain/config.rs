use serde::{Deserialize, Serialize};

use crate::domain::card::AceValue;

/// Допустимое число машинных игроков.
pub const MIN_MACHINE_PLAYERS: u8 = 1;
pub const MAX_MACHINE_PLAYERS: u8 = 3;

/// Конфиг партии. Передаётся в `GameSession::new` явно,
/// глобального состояния нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Сколько машинных игроков (1..=3). Плюс один назначенный игрок.
    pub machine_players: u8,
    /// Имя назначенного (человеческого) игрока.
    pub human_name: String,
    /// Значение туза, если он открылся стартовой картой стола
    /// (его никто не выбирал).
    pub starting_ace_value: AceValue,
    /// Перемешивать колоду после возврата руки выбывшего игрока.
    pub shuffle_returned_cards: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            machine_players: MIN_MACHINE_PLAYERS,
            human_name: "Player".into(),
            starting_ace_value: AceValue::One,
            shuffle_returned_cards: true,
        }
    }
}

impl SessionConfig {
    pub fn new(machine_players: u8) -> Self {
        Self {
            machine_players,
            ..Self::default()
        }
    }

    /// Всего мест за столом.
    pub fn player_count(&self) -> usize {
        self.machine_players as usize + 1
    }

    /// Проверка конфига. Текст ошибки уходит в `EngineError::Configuration`.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_MACHINE_PLAYERS..=MAX_MACHINE_PLAYERS).contains(&self.machine_players) {
            return Err(format!(
                "machine players must be in {}..={}, got {}",
                MIN_MACHINE_PLAYERS, MAX_MACHINE_PLAYERS, self.machine_players
            ));
        }
        Ok(())
    }
}
