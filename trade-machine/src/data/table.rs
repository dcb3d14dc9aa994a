// Generic column/row table: the shape both input spreadsheets arrive in and
// the shape the ranking view is exported as.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

/// A header row plus string cells. Rows shorter than the header are treated
/// as having empty trailing cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        RawTable { columns, rows }
    }

    /// Build a table from string literals. Mostly for tests and fixtures.
    pub fn from_strs(columns: &[&str], rows: &[&[&str]]) -> Self {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Parse CSV with a header row. Every cell is whitespace-trimmed and
    /// rows may have differing lengths.
    pub fn from_csv_reader<R: Read>(rdr: R) -> Result<Self, csv::Error> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(rdr);

        let columns = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut rows = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record)? {
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(RawTable { columns, rows })
    }

    /// Write the header and rows as CSV.
    pub fn write_csv<W: Write>(&self, wtr: W) -> Result<(), csv::Error> {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(wtr);
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Index of the first column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// A cell's value, or `None` when the row is short or the cell is empty.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_trims_cells() {
        let csv_data = "\
Player_Name, Regular ,Projection
  Stephen Curry  ,38.5, 40.1";

        let table = RawTable::from_csv_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.columns, vec!["Player_Name", "Regular", "Projection"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), Some("Stephen Curry"));
        assert_eq!(table.cell(0, 2), Some("40.1"));
    }

    #[test]
    fn strips_byte_order_mark_from_first_header() {
        let csv_data = "\u{feff}Player,Injury,Status\nA,Knee,Out";
        let table = RawTable::from_csv_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.column_index("Player"), Some(0));
    }

    #[test]
    fn short_rows_and_empty_cells_read_as_none() {
        let csv_data = "\
Player,Injury,Status
Anthony Davis,,Day-To-Day
Joel Embiid";

        let table = RawTable::from_csv_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(0, 2), Some("Day-To-Day"));
        assert_eq!(table.cell(1, 2), None);
        assert_eq!(table.cell(5, 0), None);
    }

    #[test]
    fn column_index_is_exact() {
        let table = RawTable::from_strs(&["Player_Name", "Player"], &[]);
        assert_eq!(table.column_index("Player"), Some(1));
        assert_eq!(table.column_index("player"), None);
        assert!(table.has_column("Player_Name"));
    }

    #[test]
    fn write_csv_emits_header_then_rows() {
        let table = RawTable::from_strs(&["Rank", "Player_Name"], &[&["1", "Nikola Jokić"]]);
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Rank,Player_Name\n1,Nikola Jokić\n");
    }
}
