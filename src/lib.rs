//! Движок правил Cincuentazo ("Пятьдесят").
//!
//! Игроки по очереди кладут карты в общий сброс; сумма на столе не должна
//! превышать 50. Кто не может сыграть ни одной карты - выбывает,
//! последний оставшийся побеждает.
//!
//! Слои:
//! - `domain` - карты, колода, стол, руки, игроки, конфиг;
//! - `engine` - `GameSession` и все правила;
//! - `api` - команды/запросы/DTO для UI;
//! - `infra` - RNG.
//!
//! Отрисовка, анимации и паузы "машина думает" - снаружи.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use crate::domain::{AceValue, Card, PlayerId, Rank, SessionConfig, Suit};
pub use crate::engine::{EngineError, GameSession, RandomSource};
pub use crate::infra::{DeterministicRng, SystemRng};
