use crate::domain::card::{AceValue, Card, CardValue};
use crate::domain::hand::Hand;
use crate::domain::table::TABLE_LIMIT;
use crate::engine::errors::InvalidPlayReason;

/// Значение карты для розыгрыша.
///
/// Для туза нужен выбор (`ace`); без него значения нет.
pub fn chosen_value(card: &Card, ace: Option<AceValue>) -> Option<i32> {
    match card.base_value() {
        CardValue::Fixed(v) => Some(v),
        CardValue::Ace => ace.map(AceValue::points),
    }
}

/// Можно ли сыграть карту на текущую сумму хоть при каком-то выборе.
/// Туз проверяется на оба значения.
pub fn is_playable(card: &Card, table_sum: i32) -> bool {
    match card.base_value() {
        CardValue::Fixed(v) => table_sum + v <= TABLE_LIMIT,
        CardValue::Ace => [AceValue::One, AceValue::Ten]
            .iter()
            .any(|a| table_sum + a.points() <= TABLE_LIMIT),
    }
}

/// Есть ли в руке хоть одна играбельная карта.
/// Пустая рука - не может сыграть ничего.
pub fn has_playable_card(hand: &Hand, table_sum: i32) -> bool {
    hand.cards().iter().any(|c| is_playable(c, table_sum))
}

/// Полная проверка розыгрыша. Возвращает (значение карты, новая сумма стола).
///
/// Ничего не мутирует: вызывающий коммитит только после `Ok`.
pub fn validate_play(
    hand: &Hand,
    card: &Card,
    ace: Option<AceValue>,
    table_sum: i32,
) -> Result<(i32, i32), InvalidPlayReason> {
    if !hand.contains(card) {
        return Err(InvalidPlayReason::CardNotInHand);
    }

    let value = chosen_value(card, ace).ok_or(InvalidPlayReason::AceValueNotChosen)?;

    let new_sum = table_sum + value;
    if new_sum > TABLE_LIMIT {
        return Err(InvalidPlayReason::ExceedsLimit {
            sum: table_sum,
            value,
        });
    }

    Ok((value, new_sum))
}
