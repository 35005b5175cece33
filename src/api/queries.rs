use serde::{Deserialize, Serialize};

use crate::api::dto::{HistoryDto, PlayerViewDto, SessionViewDto};
use crate::api::errors::ApiError;
use crate::domain::card::Card;
use crate::domain::PlayerId;
use crate::engine::{GameSession, RandomSource};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Вид партии глазами игрока `hero` (его карты открыты).
    GetSession { hero: Option<PlayerId> },

    /// Карты руки игрока.
    GetHand { player_id: PlayerId },

    /// Обязан ли игрок выбыть прямо сейчас.
    MustBeEliminated { player_id: PlayerId },

    IsGameOver,

    GetWinner,

    GetHistory,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    Session(SessionViewDto),
    Hand(Vec<Card>),
    MustBeEliminated(bool),
    GameOver(bool),
    Winner(Option<PlayerId>),
    History(HistoryDto),
}

/// Выполнить запрос.
pub fn run_query<R: RandomSource>(
    session: &GameSession<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    let res = match query {
        Query::GetSession { hero } => {
            QueryResponse::Session(build_session_view(session, |id| Some(id) == hero))
        }
        Query::GetHand { player_id } => QueryResponse::Hand(session.hand(player_id)?.to_vec()),
        Query::MustBeEliminated { player_id } => {
            QueryResponse::MustBeEliminated(session.must_be_eliminated(player_id)?)
        }
        Query::IsGameOver => QueryResponse::GameOver(session.is_game_over()),
        Query::GetWinner => QueryResponse::Winner(session.winner()),
        Query::GetHistory => QueryResponse::History(HistoryDto {
            events: session.history().events.clone(),
        }),
    };
    Ok(res)
}

/// Сформировать DTO партии. Карты видны только тем, для кого `is_hero` = true.
pub fn build_session_view<R: RandomSource>(
    session: &GameSession<R>,
    is_hero: impl Fn(PlayerId) -> bool,
) -> SessionViewDto {
    let players = session
        .players()
        .iter()
        .map(|p| PlayerViewDto {
            player_id: p.id,
            display_name: p.name.clone(),
            is_machine: p.is_machine(),
            eliminated: p.eliminated,
            hand_size: p.hand.len(),
            hand: is_hero(p.id).then(|| p.cards().to_vec()),
        })
        .collect();

    SessionViewDto {
        current_table_card: session.current_table_card(),
        table_sum: session.table_sum(),
        deck_size: session.deck_size(),
        players,
        eliminated: session.eliminated_players().to_vec(),
        game_over: session.is_game_over(),
        winner: session.winner(),
    }
}
