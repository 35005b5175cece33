use serde::{Deserialize, Serialize};

use crate::api::dto::{CommandResponse, HandStateDto};
use crate::api::errors::ApiError;
use crate::domain::card::Card;
use crate::domain::config::SessionConfig;
use crate::domain::PlayerId;
use crate::engine::{self, GameSession, RandomSource};

/// Создать новую партию.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateSessionCommand {
    /// Сколько машин (1..=3).
    pub machine_players: u8,
    /// Имя назначенного игрока; `None` - имя по умолчанию.
    pub human_name: Option<String>,
}

/// Команды над существующей партией.
///
/// UI маппит жесты на команды: клик по карте -> `PlayCard`
/// (для туза сначала `ChooseAceValue`), клик по колоде -> `DrawCard`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Сыграть карту из руки.
    PlayCard(PlayCardCommand),

    /// Выбрать значение туза (1 или 10) перед розыгрышем.
    ChooseAceValue(ChooseAceValueCommand),

    /// Добрать карту.
    DrawCard(DrawCardCommand),

    /// Выбить игрока.
    EliminatePlayer(EliminatePlayerCommand),

    /// Сделать ход за машинного игрока.
    MachineTurn(MachineTurnCommand),

    /// Проверить выбывание всех активных игроков (после каждого действия).
    CheckEliminations,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayCardCommand {
    pub player_id: PlayerId,
    pub card: Card,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChooseAceValueCommand {
    pub card: Card,
    /// "Сырое" значение от клиента. Допустимы 1 и 10.
    pub value: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawCardCommand {
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EliminatePlayerCommand {
    pub player_id: PlayerId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MachineTurnCommand {
    pub player_id: PlayerId,
}

/// Создать партию по команде.
pub fn create_session<R: RandomSource>(
    cmd: CreateSessionCommand,
    rng: R,
) -> Result<GameSession<R>, ApiError> {
    let mut config = SessionConfig::new(cmd.machine_players);
    if let Some(name) = cmd.human_name {
        config.human_name = name;
    }
    Ok(GameSession::new(config, rng)?)
}

/// Выполнить команду над партией.
pub fn execute<R: RandomSource>(
    session: &mut GameSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::PlayCard(PlayCardCommand { player_id, card }) => {
            let state = session.play_card(player_id, card)?;
            Ok(CommandResponse::Table(state.into()))
        }

        Command::ChooseAceValue(ChooseAceValueCommand { card, value }) => {
            let value = session.choose_ace_value(card, value)?;
            Ok(CommandResponse::AceChosen { card, value })
        }

        Command::DrawCard(DrawCardCommand { player_id }) => {
            let outcome = session.draw_card(player_id)?;
            let hand = session.hand(player_id)?.to_vec();
            Ok(CommandResponse::Hand(HandStateDto::from_outcome(
                player_id,
                hand,
                outcome,
                session.deck_size(),
            )))
        }

        Command::EliminatePlayer(EliminatePlayerCommand { player_id }) => {
            session.eliminate_player(player_id)?;
            Ok(CommandResponse::Ok)
        }

        Command::MachineTurn(MachineTurnCommand { player_id }) => {
            let turn = engine::take_machine_turn(session, player_id)?;
            Ok(CommandResponse::MachineTurn(turn))
        }

        Command::CheckEliminations => {
            let out = engine::check_eliminations(session)?;
            Ok(CommandResponse::Eliminated(out))
        }
    }
}
