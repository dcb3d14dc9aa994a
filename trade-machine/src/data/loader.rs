// Loading the performance and injury tables from disk.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use super::merge::merge;
use super::schema::PlayerTableSchema;
use super::table::RawTable;
use super::{DataError, PlayerTable};
use crate::config::DataPaths;

/// A merged table together with the schema it was read with and the newest
/// modification time of its source files.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub table: PlayerTable,
    pub schema: PlayerTableSchema,
    pub last_updated: Option<DateTime<Local>>,
}

/// Read a CSV file into a `RawTable`.
pub fn read_table(path: &Path) -> Result<RawTable, DataError> {
    let file = std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    RawTable::from_csv_reader(file).map_err(|e| DataError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load both tables named in `paths`, resolve the performance schema once,
/// and merge.
pub fn load_player_table(paths: &DataPaths) -> Result<LoadedData, DataError> {
    let performance_path = Path::new(&paths.performance);
    let injuries_path = Path::new(&paths.injuries);

    let performance = read_table(performance_path)?;
    let injuries = read_table(injuries_path)?;

    let schema = PlayerTableSchema::resolve(&performance)?;
    info!(
        "performance table keyed on `{}` ({} rows), injury report has {} rows",
        schema.identity.header(),
        performance.len(),
        injuries.len()
    );

    let table = merge(&performance, &schema, &injuries)?;
    let last_updated = last_updated(&[performance_path, injuries_path]);

    Ok(LoadedData {
        table,
        schema,
        last_updated,
    })
}

/// The most recent modification time among `paths`, or `None` if any file is
/// missing or its mtime is unavailable.
pub fn last_updated(paths: &[&Path]) -> Option<DateTime<Local>> {
    let mut latest: Option<DateTime<Local>> = None;
    for path in paths {
        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
        let modified: DateTime<Local> = modified.into();
        if latest.map_or(true, |l| modified > l) {
            latest = Some(modified);
        }
    }
    latest
}
