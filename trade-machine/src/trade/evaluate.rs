// Trade evaluation over the merged player table.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, info};

use super::side::{Padding, TradeEntry, TradeResult, TradeSide};
use super::{Side, ValidationError};
use crate::data::PlayerTable;
use crate::valuation::score::score_player;
use crate::valuation::ScoringRules;

/// Evaluate a trade between two selections of player names.
///
/// Validation happens before any scoring: a name on both sides, two empty
/// sides, or a name missing from `table` rejects the whole request. Each
/// selected player is scored with floored inputs; the shorter side is then
/// padded with filler slots until both sides are the same length.
pub fn evaluate<S: AsRef<str>>(
    table: &PlayerTable,
    week: i64,
    side_a_names: &[S],
    side_b_names: &[S],
    rules: &ScoringRules,
) -> Result<TradeResult, ValidationError> {
    let on_b: HashSet<&str> = side_b_names.iter().map(AsRef::as_ref).collect();
    let mut overlap: Vec<String> = Vec::new();
    for name in side_a_names.iter().map(AsRef::as_ref) {
        if on_b.contains(name) && !overlap.iter().any(|o| o == name) {
            overlap.push(name.to_string());
        }
    }
    if !overlap.is_empty() {
        return Err(ValidationError::PlayersOnBothSides { players: overlap });
    }

    if side_a_names.is_empty() && side_b_names.is_empty() {
        return Err(ValidationError::EmptyTrade);
    }

    let mut side_a = score_side(table, week, side_a_names, rules)?;
    let mut side_b = score_side(table, week, side_b_names, rules)?;

    let padding = match side_a.len().cmp(&side_b.len()) {
        Ordering::Less => Some((Side::A, side_b.len() - side_a.len())),
        Ordering::Greater => Some((Side::B, side_a.len() - side_b.len())),
        Ordering::Equal => None,
    };
    let padding = padding.map(|(side, slots)| {
        let target = match side {
            Side::A => &mut side_a,
            Side::B => &mut side_b,
        };
        target.pad(slots, rules.filler_score);
        debug!("{} padded with {} empty slot(s)", side, slots);
        Padding {
            side,
            slots,
            score_each: rules.filler_score,
        }
    });

    let side_a_total = side_a.total();
    let side_b_total = side_b.total();

    if side_a_total == 0.0 {
        return Err(ValidationError::DegenerateTotal { side: Side::A });
    }
    if side_b_total == 0.0 {
        return Err(ValidationError::DegenerateTotal { side: Side::B });
    }

    let ratio = (side_a_total / side_b_total).min(side_b_total / side_a_total);
    let approved = ratio >= rules.approval_threshold;

    info!(
        "trade evaluated at week {}: {:.2} vs {:.2}, ratio {:.2}, approved={}",
        week, side_a_total, side_b_total, ratio, approved
    );

    Ok(TradeResult {
        week,
        side_a,
        side_b,
        side_a_total,
        side_b_total,
        ratio,
        approved,
        padding,
    })
}

fn score_side<S: AsRef<str>>(
    table: &PlayerTable,
    week: i64,
    names: &[S],
    rules: &ScoringRules,
) -> Result<TradeSide, ValidationError> {
    let entries = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            table
                .find(name)
                .map(|record| TradeEntry::Player(score_player(record, week, rules)))
                .ok_or_else(|| ValidationError::UnknownPlayer {
                    name: name.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TradeSide { entries })
}
