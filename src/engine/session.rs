use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::{AceValue, Card, CardValue};
use crate::domain::config::SessionConfig;
use crate::domain::deck::{Deck, DECK_SIZE};
use crate::domain::hand::{Hand, HAND_SIZE};
use crate::domain::player::{MachineStrategy, Player};
use crate::domain::table::{PlayedCard, Table, TABLE_LIMIT};
use crate::domain::PlayerId;
use crate::engine::errors::EngineError;
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::validation::{has_playable_card, validate_play};
use crate::engine::RandomSource;

/// Состояние стола после успешного розыгрыша.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    pub top_card: Card,
    pub table_sum: i32,
    pub table_cards: usize,
}

/// Результат добора.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawOutcome {
    /// `None` - рука уже полная, добор не нужен.
    pub drawn: Option<Card>,
    /// Перед добором колода пополнялась картами со стола.
    pub reshuffled: bool,
    pub hand_size: usize,
}

/// Явная раскладка карт для `GameSession::from_layout`.
///
/// Колода - снизу вверх (последняя карта тянется первой),
/// стол - снизу вверх (последняя карта - текущая карта стола).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionLayout {
    pub deck: Vec<Card>,
    /// Руки в порядке мест: [0] - назначенный игрок, дальше машины.
    pub hands: Vec<Vec<Card>>,
    pub table: Vec<PlayedCard>,
}

/// Партия Cincuentazo: колода, стол, игроки и выборы тузов.
///
/// Единственный источник правды. Все мутации идут через методы ниже,
/// каждая ошибка оставляет состояние нетронутым (сначала проверка, потом коммит).
#[derive(Clone, Debug)]
pub struct GameSession<R: RandomSource> {
    config: SessionConfig,
    deck: Deck,
    table: Table,
    players: Vec<Player>,
    /// Выбранные, но ещё не сыгранные значения тузов.
    ace_choices: HashMap<Card, AceValue>,
    /// Выбывшие в порядке выбывания.
    eliminated: Vec<PlayerId>,
    history: GameHistory,
    finished: bool,
    rng: R,
}

impl<R: RandomSource> GameSession<R> {
    /// Новая партия:
    /// - собирает и тасует колоду;
    /// - сажает назначенного игрока и N машин;
    /// - раздаёт по 4 карты по кругу;
    /// - открывает стартовую карту стола.
    pub fn new(config: SessionConfig, mut rng: R) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Configuration)?;

        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);

        let mut players = seat_players(&config);

        for _round in 0..HAND_SIZE {
            for p in players.iter_mut() {
                let card = deck.draw_one().ok_or(EngineError::DeckEmpty)?;
                p.hand.add(card);
            }
        }

        let starting = deck.draw_one().ok_or(EngineError::DeckEmpty)?;
        let value = starting.base_value().resolve(config.starting_ace_value);
        let table = Table::with_starting_card(starting, value);

        let mut session = Self {
            config,
            deck,
            table,
            players,
            ace_choices: HashMap::new(),
            eliminated: Vec::new(),
            history: GameHistory::new(),
            finished: false,
            rng,
        };
        session.record_start();

        Ok(session)
    }

    /// Партия из явной раскладки карт (для сценариев и тестов).
    ///
    /// Проверяет, что раскладка соблюдает инварианты партии:
    /// ровно 52 карты каталога без дублей, руки не больше 4 карт,
    /// стол не пустой, значения на столе допустимы, сумма <= 50.
    pub fn from_layout(
        config: SessionConfig,
        layout: SessionLayout,
        rng: R,
    ) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Configuration)?;
        validate_layout(&config, &layout).map_err(EngineError::Configuration)?;

        let SessionLayout { deck, hands, table } = layout;
        let table = Table::from_history(table)
            .ok_or_else(|| EngineError::Configuration("table must not be empty".into()))?;

        let mut players = seat_players(&config);
        for (p, cards) in players.iter_mut().zip(hands) {
            p.hand = Hand::from_cards(cards);
        }

        let mut session = Self {
            config,
            deck: Deck::from_cards(deck),
            table,
            players,
            ace_choices: HashMap::new(),
            eliminated: Vec::new(),
            history: GameHistory::new(),
            finished: false,
            rng,
        };
        session.record_start();

        Ok(session)
    }

    fn record_start(&mut self) {
        let top = *self.table.top();
        self.history.push(GameEventKind::SessionStarted {
            players: self.players.len() as u8,
            starting_card: top.card,
            table_sum: self.table.sum(),
        });
        info!(
            players = self.players.len(),
            starting_card = %top.card,
            table_sum = self.table.sum(),
            "session started"
        );
    }

    // ---------------------------
    // Чтение состояния

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, player_id: PlayerId) -> Result<&Player, EngineError> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))
    }

    pub fn hand(&self, player_id: PlayerId) -> Result<&[Card], EngineError> {
        Ok(self.player(player_id)?.cards())
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_sum(&self) -> i32 {
        self.table.sum()
    }

    pub fn current_table_card(&self) -> Card {
        self.table.top_card()
    }

    /// Колода (диагностика и тесты).
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Выбранное, но ещё не сыгранное значение туза.
    pub fn ace_choice(&self, card: &Card) -> Option<AceValue> {
        self.ace_choices.get(card).copied()
    }

    pub fn eliminated_players(&self) -> &[PlayerId] {
        &self.eliminated
    }

    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_active())
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    // ---------------------------
    // Ходы

    /// Сыграть карту из руки игрока.
    ///
    /// Для туза значение должно быть выбрано заранее (`choose_ace_value`).
    /// Если новая сумма > 50 - ошибка, состояние не меняется.
    pub fn play_card(&mut self, player_id: PlayerId, card: Card) -> Result<TableState, EngineError> {
        let idx = self.active_index(player_id)?;
        let ace = self.ace_choices.get(&card).copied();

        let (value, new_sum) = validate_play(&self.players[idx].hand, &card, ace, self.table.sum())?;

        // Коммит.
        self.players[idx].hand.remove(&card);
        self.table.place(card, value);
        self.ace_choices.remove(&card);

        self.history.push(GameEventKind::CardPlayed {
            player_id,
            card,
            value,
            table_sum: new_sum,
        });
        debug!(player = player_id, card = %card, value, sum = new_sum, "card played");

        Ok(TableState {
            top_card: card,
            table_sum: new_sum,
            table_cards: self.table.len(),
        })
    }

    /// Привязать значение (1 или 10) к тузу перед розыгрышем.
    ///
    /// Туз должен быть в руке активного игрока. Карту не двигает.
    /// Повторный вызов перезаписывает выбор.
    pub fn choose_ace_value(&mut self, card: Card, value: i32) -> Result<AceValue, EngineError> {
        if !card.is_ace() {
            return Err(EngineError::InvalidChoice(format!("{card} is not an ace")));
        }
        if !self.active_players().any(|p| p.hand.contains(&card)) {
            return Err(EngineError::InvalidChoice(format!(
                "{card} is not in an active player's hand"
            )));
        }
        let ace = AceValue::from_points(value).ok_or_else(|| {
            EngineError::InvalidChoice(format!("ace value must be 1 or 10, got {value}"))
        })?;

        self.ace_choices.insert(card, ace);
        self.history
            .push(GameEventKind::AceValueChosen { card, value: ace });
        debug!(card = %card, value = ace.points(), "ace value chosen");

        Ok(ace)
    }

    /// Добрать карту из колоды.
    ///
    /// - рука полная (4 карты) - ничего не делаем;
    /// - колода пуста - перекладываем в неё всё со стола, кроме верхней карты,
    ///   и тасуем; если перекладывать нечего - `DeckEmpty`.
    pub fn draw_card(&mut self, player_id: PlayerId) -> Result<DrawOutcome, EngineError> {
        let idx = self.active_index(player_id)?;

        if self.players[idx].hand.is_full() {
            return Ok(DrawOutcome {
                drawn: None,
                reshuffled: false,
                hand_size: self.players[idx].hand.len(),
            });
        }

        let mut reshuffled = false;
        if self.deck.is_empty() {
            if self.table.len() <= 1 {
                return Err(EngineError::DeckEmpty);
            }
            self.reshuffle_table_into_deck();
            reshuffled = true;
        }

        let card = self.deck.draw_one().ok_or(EngineError::DeckEmpty)?;
        self.players[idx].hand.add(card);

        self.history
            .push(GameEventKind::CardDrawn { player_id, card });
        debug!(player = player_id, card = %card, deck = self.deck.len(), "card drawn");

        Ok(DrawOutcome {
            drawn: Some(card),
            reshuffled,
            hand_size: self.players[idx].hand.len(),
        })
    }

    /// Все карты стола, кроме верхней, уходят в колоду. Сумма стола не меняется.
    fn reshuffle_table_into_deck(&mut self) {
        let mut recycled = self.table.recycle_under_top();
        self.rng.shuffle(&mut recycled);

        let count = recycled.len();
        self.deck.put_back(recycled);

        self.history
            .push(GameEventKind::DeckReshuffled { recycled: count });
        info!(recycled = count, table_sum = self.table.sum(), "deck replenished from table");
    }

    // ---------------------------
    // Выбывание и конец партии

    /// Игрок обязан выбыть, если ни одна карта руки не держит сумму <= 50.
    /// Туз без выбора проверяется на оба значения. Пустая рука - выбывает.
    pub fn must_be_eliminated(&self, player_id: PlayerId) -> Result<bool, EngineError> {
        let player = self.player(player_id)?;
        Ok(!has_playable_card(&player.hand, self.table.sum()))
    }

    /// Есть ли у игрока хоть одна играбельная карта.
    pub fn can_play(&self, player_id: PlayerId) -> Result<bool, EngineError> {
        self.must_be_eliminated(player_id).map(|must| !must)
    }

    /// Выбыть: рука уходит в колоду, флаг `eliminated` ставится навсегда.
    /// Повторный вызов для уже выбывшего игрока ничего не делает.
    pub fn eliminate_player(&mut self, player_id: PlayerId) -> Result<(), EngineError> {
        let idx = self.index_of(player_id)?;
        if self.players[idx].eliminated {
            return Ok(());
        }

        let returned = self.players[idx].hand.take_all();
        let count = returned.len();
        for card in returned.iter().filter(|c| c.is_ace()) {
            self.ace_choices.remove(card);
        }
        self.deck.put_back(returned);
        if self.config.shuffle_returned_cards {
            self.rng.shuffle(&mut self.deck.cards);
        }

        self.players[idx].eliminated = true;
        self.eliminated.push(player_id);

        self.history.push(GameEventKind::PlayerEliminated {
            player_id,
            returned_cards: count,
        });
        info!(player = player_id, returned_cards = count, "player eliminated");

        if !self.finished && self.is_game_over() {
            self.finished = true;
            let winner = self.winner();
            self.history.push(GameEventKind::GameFinished { winner });
            info!(winner = ?winner, "game over");
        }

        Ok(())
    }

    /// Партия закончена, когда активных игроков <= 1.
    pub fn is_game_over(&self) -> bool {
        self.active_players().count() <= 1
    }

    /// Единственный оставшийся игрок. `None`, пока партия идёт,
    /// и в вырожденном случае, когда выбыли все.
    pub fn winner(&self) -> Option<PlayerId> {
        let mut active = self.active_players();
        match (active.next(), active.next()) {
            (Some(p), None) => Some(p.id),
            _ => None,
        }
    }

    // ---------------------------

    fn index_of(&self, player_id: PlayerId) -> Result<usize, EngineError> {
        self.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(EngineError::PlayerNotFound(player_id))
    }

    fn active_index(&self, player_id: PlayerId) -> Result<usize, EngineError> {
        let idx = self.index_of(player_id)?;
        if self.players[idx].eliminated {
            return Err(EngineError::PlayerEliminated(player_id));
        }
        Ok(idx)
    }
}

/// Места: 0 - назначенный игрок, 1..=N - машины.
fn seat_players(config: &SessionConfig) -> Vec<Player> {
    let mut players = Vec::with_capacity(config.player_count());
    players.push(Player::human(0, config.human_name.clone()));
    for i in 1..=config.machine_players {
        players.push(Player::machine(
            i,
            format!("Machine {i}"),
            MachineStrategy::FirstPlayable,
        ));
    }
    players
}

fn validate_layout(config: &SessionConfig, layout: &SessionLayout) -> Result<(), String> {
    if layout.hands.len() != config.player_count() {
        return Err(format!(
            "expected {} hands, got {}",
            config.player_count(),
            layout.hands.len()
        ));
    }
    if let Some(big) = layout.hands.iter().find(|h| h.len() > HAND_SIZE) {
        return Err(format!("hand holds {} cards, max is {HAND_SIZE}", big.len()));
    }
    if layout.table.is_empty() {
        return Err("table must not be empty".into());
    }

    for played in &layout.table {
        let ok = match played.card.base_value() {
            CardValue::Fixed(v) => v == played.value,
            CardValue::Ace => AceValue::from_points(played.value).is_some(),
        };
        if !ok {
            return Err(format!("{} cannot be worth {}", played.card, played.value));
        }
    }
    let sum: i32 = layout.table.iter().map(|p| p.value).sum();
    if sum > TABLE_LIMIT {
        return Err(format!("table sum {sum} exceeds {TABLE_LIMIT}"));
    }

    let all: Vec<Card> = layout
        .deck
        .iter()
        .chain(layout.hands.iter().flatten())
        .chain(layout.table.iter().map(|p| &p.card))
        .copied()
        .collect();
    let unique: HashSet<Card> = all.iter().copied().collect();
    if all.len() != DECK_SIZE || unique.len() != DECK_SIZE {
        return Err(format!(
            "layout must hold each of the {DECK_SIZE} cards exactly once ({} cards, {} unique)",
            all.len(),
            unique.len()
        ));
    }

    Ok(())
}
