//! Доменная модель Cincuentazo: карты, колода, стол, руки, игроки, конфиг.
//!
//! Только данные и простые операции над ними. Правила игры и
//! все проверки живут в `engine`.

pub mod card;
pub mod config;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

/// Идентификатор игрока = его место в порядке хода (0 - назначенный игрок).
pub type PlayerId = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
