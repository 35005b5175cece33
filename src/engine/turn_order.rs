use crate::domain::PlayerId;
use crate::engine::session::GameSession;
use crate::engine::RandomSource;

/// Следующий активный игрок по кругу после `after` (не включая его).
///
/// Если `after` - единственный активный, вернётся он сам.
/// `None`, если активных нет или `after` не за столом.
pub fn next_active_player<R: RandomSource>(
    session: &GameSession<R>,
    after: PlayerId,
) -> Option<PlayerId> {
    let players = session.players();
    let start = players.iter().position(|p| p.id == after)?;
    let n = players.len();

    (1..=n)
        .map(|step| &players[(start + step) % n])
        .find(|p| p.is_active())
        .map(|p| p.id)
}

/// Активные игроки в порядке хода, начиная с `start` (включительно).
pub fn active_order_from<R: RandomSource>(
    session: &GameSession<R>,
    start: PlayerId,
) -> Vec<PlayerId> {
    let players = session.players();
    let Some(begin) = players.iter().position(|p| p.id == start) else {
        return Vec::new();
    };
    let n = players.len();

    (0..n)
        .map(|step| &players[(begin + step) % n])
        .filter(|p| p.is_active())
        .map(|p| p.id)
        .collect()
}
