// Left join of the performance table with the injury report.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::schema::{InjuryTableSchema, PlayerTableSchema};
use super::table::RawTable;
use super::{DataError, PlayerRecord, PlayerTable, DEFAULT_INJURY, DEFAULT_STATUS};

/// Injury fields of one report row; `None` means the cell was empty.
#[derive(Debug, Clone, Copy)]
struct InjuryFields<'a> {
    injury: Option<&'a str>,
    status: Option<&'a str>,
}

/// Resolve the performance schema and merge in one step.
pub fn merge_tables(performance: &RawTable, injuries: &RawTable) -> Result<PlayerTable, DataError> {
    let schema = PlayerTableSchema::resolve(performance)?;
    merge(performance, &schema, injuries)
}

/// Left-join `performance` with `injuries` on player name.
///
/// Every performance row is kept, in order. Names are compared as exact
/// strings. A performance row matching several injury rows yields one output
/// row per match, in report order. Unmatched rows, and matched rows with empty
/// cells, get `"Healthy"` / `"Active"`.
///
/// `Regular` and `Projection` must be present and finite on every row; they
/// are stored unfloored.
pub fn merge(
    performance: &RawTable,
    schema: &PlayerTableSchema,
    injuries: &RawTable,
) -> Result<PlayerTable, DataError> {
    let injury_schema = InjuryTableSchema::resolve(injuries)?;
    if injury_schema.injury_idx.is_none() || injury_schema.status_idx.is_none() {
        warn!("injury report lacks Injury or Status column; defaults will be used");
    }

    let mut by_player: HashMap<&str, Vec<InjuryFields<'_>>> = HashMap::new();
    for row in 0..injuries.len() {
        let Some(player) = injuries.cell(row, injury_schema.player_idx) else {
            continue;
        };
        by_player.entry(player).or_default().push(InjuryFields {
            injury: injury_schema.injury_idx.and_then(|i| injuries.cell(row, i)),
            status: injury_schema.status_idx.and_then(|i| injuries.cell(row, i)),
        });
    }

    let unmatched = InjuryFields {
        injury: None,
        status: None,
    };

    let mut records = Vec::with_capacity(performance.len());
    for row in 0..performance.len() {
        let player_name = performance
            .cell(row, schema.identity_idx)
            .unwrap_or_default()
            .to_string();
        let regular = parse_number(performance, row, schema.regular_idx, &player_name, "Regular")?;
        let projection = parse_number(
            performance,
            row,
            schema.projection_idx,
            &player_name,
            "Projection",
        )?;

        let matches = by_player
            .get(player_name.as_str())
            .map(Vec::as_slice)
            .unwrap_or(std::slice::from_ref(&unmatched));
        if matches.len() > 1 {
            debug!(
                "{} injury rows for '{}', emitting one record per row",
                matches.len(),
                player_name
            );
        }

        for fields in matches {
            records.push(PlayerRecord {
                player_name: player_name.clone(),
                regular,
                projection,
                injury: fields.injury.unwrap_or(DEFAULT_INJURY).to_string(),
                status: fields.status.unwrap_or(DEFAULT_STATUS).to_string(),
            });
        }
    }

    Ok(PlayerTable::new(records))
}

fn parse_number(
    table: &RawTable,
    row: usize,
    column_idx: usize,
    player: &str,
    column: &'static str,
) -> Result<f64, DataError> {
    let raw = table.cell(row, column_idx).ok_or_else(|| DataError::MissingValue {
        row: row + 1,
        player: player.to_string(),
        column,
    })?;

    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(DataError::InvalidNumber {
            row: row + 1,
            player: player.to_string(),
            column,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn injuries() -> RawTable {
        RawTable::from_strs(
            &["Player", "Injury", "Status"],
            &[
                &["Joel Embiid", "Knee", "Out"],
                &["Kawhi Leonard", "Knee", "Out For Season"],
            ],
        )
    }

    #[test]
    fn unmatched_rows_get_defaults() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Joel Embiid", "48.2", "50.0"], &["Tyrese Haliburton", "41", "43"]],
        );

        let table = merge_tables(&perf, &injuries()).unwrap();
        assert_eq!(table.len(), 2);

        let embiid = &table.records()[0];
        assert_eq!(embiid.player_name, "Joel Embiid");
        assert_eq!(embiid.injury, "Knee");
        assert_eq!(embiid.status, "Out");

        let hali = &table.records()[1];
        assert_eq!(hali.injury, "Healthy");
        assert_eq!(hali.status, "Active");
    }

    #[test]
    fn injury_only_players_are_dropped() {
        let perf = RawTable::from_strs(
            &["Player", "Regular", "Projection"],
            &[&["Joel Embiid", "48.2", "50.0"]],
        );

        let table = merge_tables(&perf, &injuries()).unwrap();
        assert_eq!(table.names(), vec!["Joel Embiid"]);
        assert!(table.find("Kawhi Leonard").is_none());
    }

    #[test]
    fn player_column_identity_yields_player_name_field() {
        let perf = RawTable::from_strs(
            &["Player", "Regular", "Projection"],
            &[&["Kawhi Leonard", "30", "35"]],
        );
        let table = merge_tables(&perf, &injuries()).unwrap();
        let r = table.find("Kawhi Leonard").unwrap();
        assert_eq!(r.status, "Out For Season");
    }

    #[test]
    fn empty_injury_cells_are_default_filled() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Ja Morant", "39", "40"]],
        );
        let inj = RawTable::from_strs(&["Player", "Injury", "Status"], &[&["Ja Morant", "", ""]]);
        let table = merge_tables(&perf, &inj).unwrap();
        assert_eq!(table.records()[0].injury, "Healthy");
        assert_eq!(table.records()[0].status, "Active");
    }

    #[test]
    fn missing_injury_columns_are_default_filled() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Ja Morant", "39", "40"]],
        );
        let inj = RawTable::from_strs(&["Player", "Status"], &[&["Ja Morant", "Questionable"]]);
        let table = merge_tables(&perf, &inj).unwrap();
        assert_eq!(table.records()[0].injury, "Healthy");
        assert_eq!(table.records()[0].status, "Questionable");
    }

    #[test]
    fn duplicate_performance_rows_are_preserved() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Dup", "10", "10"], &["Dup", "20", "20"]],
        );
        let table = merge_tables(&perf, &injuries()).unwrap();
        assert_eq!(table.len(), 2);
        assert!((table.records()[1].regular - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn duplicate_injury_rows_fan_out() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Zion Williamson", "44", "45"], &["Other", "1", "1"]],
        );
        let inj = RawTable::from_strs(
            &["Player", "Injury", "Status"],
            &[
                &["Zion Williamson", "Hamstring", "Out"],
                &["Zion Williamson", "Rest", "Day-To-Day"],
            ],
        );
        let table = merge_tables(&perf, &inj).unwrap();
        assert_eq!(table.names(), vec!["Zion Williamson", "Zion Williamson", "Other"]);
        assert_eq!(table.records()[0].injury, "Hamstring");
        assert_eq!(table.records()[1].injury, "Rest");
    }

    #[test]
    fn names_compare_exactly() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["joel embiid", "48", "50"]],
        );
        let table = merge_tables(&perf, &injuries()).unwrap();
        assert_eq!(table.records()[0].injury, "Healthy");
    }

    #[test]
    fn values_are_not_floored_at_merge() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Rookie", "0", "-1.5"]],
        );
        let table = merge_tables(&perf, &injuries()).unwrap();
        assert!((table.records()[0].regular - 0.0).abs() < f64::EPSILON);
        assert!((table.records()[0].projection + 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_performance_value_is_an_error() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Ok", "1", "2"], &["Broken", "", "2"]],
        );
        match merge_tables(&perf, &injuries()).unwrap_err() {
            DataError::MissingValue { row, player, column } => {
                assert_eq!(row, 2);
                assert_eq!(player, "Broken");
                assert_eq!(column, "Regular");
            }
            other => panic!("expected MissingValue, got: {other}"),
        }
    }

    #[test]
    fn non_numeric_and_non_finite_values_are_errors() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Bad", "12", "n/a"]],
        );
        assert!(matches!(
            merge_tables(&perf, &injuries()),
            Err(DataError::InvalidNumber { column: "Projection", .. })
        ));

        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["Bad", "NaN", "3"]],
        );
        assert!(matches!(
            merge_tables(&perf, &injuries()),
            Err(DataError::InvalidNumber { column: "Regular", .. })
        ));
    }

    #[test]
    fn missing_identity_column_fails_merge() {
        let perf = RawTable::from_strs(&["Name", "Regular", "Projection"], &[&["X", "1", "1"]]);
        assert!(matches!(
            merge_tables(&perf, &injuries()),
            Err(DataError::MissingIdentityColumn { .. })
        ));
    }

    #[test]
    fn injury_table_without_player_column_fails_merge() {
        let perf = RawTable::from_strs(
            &["Player_Name", "Regular", "Projection"],
            &[&["X", "1", "1"]],
        );
        let inj = RawTable::from_strs(&["Player_Name", "Injury", "Status"], &[]);
        assert!(matches!(
            merge_tables(&perf, &inj),
            Err(DataError::MissingColumn { table: "injury", column: "Player" })
        ));
    }
}
