mod common;

use cincuentazo_engine::{
    api::{
        commands::{
            create_session, execute, ChooseAceValueCommand, Command, CreateSessionCommand,
            DrawCardCommand, EliminatePlayerCommand, MachineTurnCommand, PlayCardCommand,
        },
        dto::{CommandResponse, HandStateDto, TableStateDto},
        errors::ApiError,
        queries::{build_session_view, run_query, Query, QueryResponse},
    },
    domain::{AceValue, SessionConfig},
    engine::{EngineError, GameEventKind, GameSession, InvalidPlayReason, MachineTurn},
};

use common::{c, cards, layout, played, NoShuffle};

/// Утилита: партия без тасовки через API.
fn make_session(machines: u8) -> GameSession<NoShuffle> {
    create_session(
        CreateSessionCommand {
            machine_players: machines,
            human_name: Some("Ana".into()),
        },
        NoShuffle,
    )
    .expect("valid create command")
}

// -----------------------------
// Команды
// -----------------------------

#[test]
fn create_session_applies_name_and_rejects_bad_count() {
    let session = make_session(2);
    assert_eq!(session.players()[0].name, "Ana");
    assert_eq!(session.players().len(), 3);

    let err = create_session(
        CreateSessionCommand {
            machine_players: 4,
            human_name: None,
        },
        NoShuffle,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));
}

#[test]
fn play_then_draw_through_commands() {
    let mut session = make_session(1);

    let res = execute(
        &mut session,
        Command::PlayCard(PlayCardCommand {
            player_id: 0,
            card: c("7s"),
        }),
    )
    .unwrap();
    assert_eq!(
        res,
        CommandResponse::Table(TableStateDto {
            top_card: c("7s"),
            table_sum: 12,
            table_cards: 2,
        })
    );

    let res = execute(
        &mut session,
        Command::DrawCard(DrawCardCommand { player_id: 0 }),
    )
    .unwrap();
    assert_eq!(
        res,
        CommandResponse::Hand(HandStateDto {
            player_id: 0,
            hand: cards(&["Ks", "Js", "9s", "4s"]),
            drawn: Some(c("4s")),
            reshuffled: false,
            deck_size: 42,
        })
    );
}

#[test]
fn ace_choice_command_then_play() {
    let l = layout(
        &[&["Ah", "2c", "3c", "4c"], &["2d", "3d", "4d", "5d"]],
        &[played("5s")],
        &[],
    );
    let mut session = GameSession::from_layout(SessionConfig::new(1), l, NoShuffle).unwrap();

    let err = execute(
        &mut session,
        Command::ChooseAceValue(ChooseAceValueCommand {
            card: c("Ah"),
            value: 7,
        }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidChoice(_)));

    let res = execute(
        &mut session,
        Command::ChooseAceValue(ChooseAceValueCommand {
            card: c("Ah"),
            value: 10,
        }),
    )
    .unwrap();
    assert_eq!(
        res,
        CommandResponse::AceChosen {
            card: c("Ah"),
            value: AceValue::Ten
        }
    );

    let res = execute(
        &mut session,
        Command::PlayCard(PlayCardCommand {
            player_id: 0,
            card: c("Ah"),
        }),
    )
    .unwrap();
    assert!(matches!(res, CommandResponse::Table(t) if t.table_sum == 15));
}

#[test]
fn machine_turn_and_elimination_commands() {
    let mut session = make_session(1);

    let res = execute(
        &mut session,
        Command::MachineTurn(MachineTurnCommand { player_id: 1 }),
    )
    .unwrap();
    assert!(matches!(
        res,
        CommandResponse::MachineTurn(MachineTurn::Played { table_sum: -5, .. })
    ));

    let err = execute(
        &mut session,
        Command::MachineTurn(MachineTurnCommand { player_id: 0 }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));

    let res = execute(&mut session, Command::CheckEliminations).unwrap();
    assert_eq!(res, CommandResponse::Eliminated(vec![]));

    let res = execute(
        &mut session,
        Command::EliminatePlayer(EliminatePlayerCommand { player_id: 1 }),
    )
    .unwrap();
    assert_eq!(res, CommandResponse::Ok);
    assert!(session.is_game_over());
}

// -----------------------------
// Ошибки
// -----------------------------

#[test]
fn engine_errors_map_to_api_errors() {
    assert_eq!(
        ApiError::from(EngineError::PlayerNotFound(7)),
        ApiError::PlayerNotFound(7)
    );
    assert_eq!(ApiError::from(EngineError::DeckEmpty), ApiError::DeckEmpty);
    assert_eq!(
        ApiError::from(EngineError::InvalidPlay(InvalidPlayReason::AceValueNotChosen)),
        ApiError::InvalidPlay("ace value not chosen".into())
    );
    assert!(matches!(
        ApiError::from(EngineError::PlayerEliminated(2)),
        ApiError::InvalidCommand(_)
    ));
    assert!(matches!(
        ApiError::from(EngineError::Configuration("x".into())),
        ApiError::Configuration(m) if m == "x"
    ));
}

#[test]
fn exceeding_play_is_reported_with_numbers() {
    let l = layout(
        &[&["9c", "2c", "3c", "4c"], &["2d", "3d", "4d", "5d"]],
        &[played("Th"), played("Td"), played("Ts"), played("9h"), played("6h")],
        &[],
    );
    let mut session = GameSession::from_layout(SessionConfig::new(1), l, NoShuffle).unwrap();

    let err = execute(
        &mut session,
        Command::PlayCard(PlayCardCommand {
            player_id: 0,
            card: c("9c"),
        }),
    )
    .unwrap_err();

    match err {
        ApiError::InvalidPlay(msg) => {
            assert!(msg.contains("50"), "{msg}");
            assert!(msg.contains("45"), "{msg}");
        }
        other => panic!("expected InvalidPlay, got {other:?}"),
    }
}

// -----------------------------
// Запросы
// -----------------------------

#[test]
fn session_view_hides_other_hands() {
    let session = make_session(2);

    let view = build_session_view(&session, |id| id == 0);
    assert_eq!(view.table_sum, session.table_sum());
    assert_eq!(view.deck_size, session.deck_size());
    assert_eq!(view.players.len(), 3);
    assert_eq!(view.players[0].hand.as_deref(), Some(session.hand(0).unwrap()));
    assert!(view.players[1].hand.is_none());
    assert_eq!(view.players[1].hand_size, 4);
    assert!(view.players[1].is_machine);
    assert!(!view.game_over);
    assert_eq!(view.winner, None);

    let res = run_query(&session, Query::GetSession { hero: None }).unwrap();
    match res {
        QueryResponse::Session(v) => assert!(v.players.iter().all(|p| p.hand.is_none())),
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn simple_queries() {
    let mut session = make_session(1);

    assert_eq!(
        run_query(&session, Query::GetHand { player_id: 1 }).unwrap(),
        QueryResponse::Hand(cards(&["Qs", "Ts", "8s", "6s"]))
    );
    assert_eq!(
        run_query(&session, Query::MustBeEliminated { player_id: 0 }).unwrap(),
        QueryResponse::MustBeEliminated(false)
    );
    assert_eq!(
        run_query(&session, Query::GetHand { player_id: 5 }),
        Err(ApiError::PlayerNotFound(5))
    );

    session.eliminate_player(0).unwrap();
    assert_eq!(
        run_query(&session, Query::IsGameOver).unwrap(),
        QueryResponse::GameOver(true)
    );
    assert_eq!(
        run_query(&session, Query::GetWinner).unwrap(),
        QueryResponse::Winner(Some(1))
    );

    match run_query(&session, Query::GetHistory).unwrap() {
        QueryResponse::History(h) => {
            assert!(matches!(
                h.events.first().map(|e| &e.kind),
                Some(GameEventKind::SessionStarted { .. })
            ));
            assert_eq!(
                h.events.last().map(|e| &e.kind),
                Some(&GameEventKind::GameFinished { winner: Some(1) })
            );
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn commands_and_views_serialize_to_json() {
    let cmd = Command::PlayCard(PlayCardCommand {
        player_id: 0,
        card: c("Td"),
    });
    let json = serde_json::to_string(&cmd).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();
    assert!(matches!(back, Command::PlayCard(p) if p.card == c("Td")));

    let session = make_session(1);
    let view = build_session_view(&session, |_| true);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["table_sum"], 5);
    assert_eq!(json["players"][0]["display_name"], "Ana");
}
