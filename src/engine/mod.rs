//! Движок Cincuentazo: розыгрыш, добор, перетасовка стола, выбывание.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `play_card` / `choose_ace_value` / `draw_card` – ход игрока
//!   - `must_be_eliminated` / `eliminate_player` – выбывание
//!   - `is_game_over` / `winner` – конец партии
//!
//! Порядок ходов движок не навязывает: это забота внешнего драйвера
//! (UI или `game_loop`).

pub mod errors;
pub mod game_loop;
pub mod history;
pub mod session;
pub mod strategy;
pub mod turn_order;
pub mod validation;

pub use errors::{EngineError, InvalidPlayReason};
pub use game_loop::{check_eliminations, take_machine_turn, take_turn_with, MachineTurn};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use session::{DrawOutcome, GameSession, SessionLayout, TableState};
pub use strategy::CardChoice;
pub use turn_order::{active_order_from, next_active_player};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
