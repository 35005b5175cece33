use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::card::Card;
use crate::domain::player::{MachineStrategy, PlayerKind};
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::session::GameSession;
use crate::engine::RandomSource;

/// Итог хода по стратегии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MachineTurn {
    /// Сыграна карта; `drawn` - что добрано после (если добор удался).
    Played {
        card: Card,
        table_sum: i32,
        drawn: Option<Card>,
    },
    /// Играбельной карты нет - пас (без розыгрыша и добора).
    /// Выбывание решает отдельная проверка, а не сам пас.
    Passed,
}

/// Ход машинного игрока по его стратегии.
pub fn take_machine_turn<R: RandomSource>(
    session: &mut GameSession<R>,
    player_id: PlayerId,
) -> Result<MachineTurn, EngineError> {
    let strategy = match session.player(player_id)?.kind {
        PlayerKind::Machine(strategy) => strategy,
        PlayerKind::Human => return Err(EngineError::NotMachine(player_id)),
    };
    take_turn_with(session, player_id, strategy)
}

/// Ход любого игрока по заданной стратегии:
/// - выбрать карту;
/// - для туза привязать значение;
/// - сыграть;
/// - добрать.
pub fn take_turn_with<R: RandomSource>(
    session: &mut GameSession<R>,
    player_id: PlayerId,
    strategy: MachineStrategy,
) -> Result<MachineTurn, EngineError> {
    let player = session.player(player_id)?;
    if player.eliminated {
        return Err(EngineError::PlayerEliminated(player_id));
    }

    let Some(choice) = strategy.select_card_to_play(player.cards(), session.table_sum()) else {
        debug!(player = player_id, sum = session.table_sum(), "no playable card, passing");
        return Ok(MachineTurn::Passed);
    };

    if let Some(ace) = choice.ace_value {
        session.choose_ace_value(choice.card, ace.points())?;
    }
    let state = session.play_card(player_id, choice.card)?;

    let drawn = match session.draw_card(player_id) {
        Ok(outcome) => outcome.drawn,
        Err(EngineError::DeckEmpty) => {
            warn!(player = player_id, "nothing to draw after play");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(MachineTurn::Played {
        card: choice.card,
        table_sum: state.table_sum,
        drawn,
    })
}

/// Проверка выбывания после одного действия.
///
/// Идём по местам по порядку и выбиваем тех, кто не может сыграть.
/// Останавливаемся, как только остался один активный: последний
/// оставшийся - победитель, даже если он тоже не может сыграть.
/// Возвращает выбывших в этом проходе.
pub fn check_eliminations<R: RandomSource>(
    session: &mut GameSession<R>,
) -> Result<Vec<PlayerId>, EngineError> {
    let mut out = Vec::new();
    let ids: Vec<PlayerId> = session.active_players().map(|p| p.id).collect();

    for id in ids {
        if session.is_game_over() {
            break;
        }
        if session.must_be_eliminated(id)? {
            session.eliminate_player(id)?;
            out.push(id);
        }
    }

    Ok(out)
}
