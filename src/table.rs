use std::io::Read;

use crate::error::{Error, Result};

/// A single table value. CSV ingest produces `Text`; the synthetic generator
/// produces `Number`. Numeric coercion happens once, at record conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }

    /// Coerce to f64. Integer and float text both parse; anything else is a
    /// conversion error, which is fatal downstream.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Cell::Number(n) => Ok(*n),
            Cell::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| Error::Conversion(format!("not a number: '{}'", s))),
        }
    }
}

/// The tabular form both acquisition paths produce: ordered column names and
/// rectangular rows. No value semantics are attached here; the normalize
/// stage decides what the columns mean.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Rename a column in place. Returns false if `from` does not exist.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.columns[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Append a column, producing one cell per existing row. The closure sees
    /// the row index and the row as it currently stands.
    pub fn add_column_with<F>(&mut self, name: &str, mut f: F)
    where
        F: FnMut(usize, &[Cell]) -> Cell,
    {
        for (idx, row) in self.rows.iter_mut().enumerate() {
            let cell = f(idx, row);
            row.push(cell);
        }
        self.columns.push(name.to_string());
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Read a CSV document into a table. Headers become column names; every
    /// value stays text until coercion. Structural problems (ragged rows,
    /// broken quoting) surface here, at acquisition time.
    pub fn from_csv<R: Read>(reader: R) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(clean_header)
            .collect();

        let mut table = DataTable::new(columns);
        for record in reader.records() {
            let row = record?.iter().map(|v| Cell::Text(v.to_string())).collect();
            table.push_row(row);
        }

        Ok(table)
    }
}

fn clean_header(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM;
    // left in place it would defeat column lookup.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_csv() -> &'static str {
        "Date,Open,Close\n2020-01-01,7200.5,7250\n2020-01-02,7250,7300.25\n"
    }

    #[test]
    fn from_csv_reads_headers_and_rows() {
        let table = DataTable::from_csv(sample_csv().as_bytes()).unwrap();
        assert_eq!(table.columns(), &["Date", "Open", "Close"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.cell(0, "Date"),
            Some(&Cell::Text("2020-01-01".to_string()))
        );
        assert_eq!(
            table.cell(1, "Close"),
            Some(&Cell::Text("7300.25".to_string()))
        );
    }

    #[test]
    fn from_csv_strips_bom_from_first_header() {
        let table = DataTable::from_csv("\u{feff}Date,Open\n2020-01-01,1\n".as_bytes()).unwrap();
        assert!(table.has_column("Date"));
    }

    #[test]
    fn from_csv_rejects_ragged_rows() {
        let result = DataTable::from_csv("a,b\n1,2,3\n".as_bytes());
        assert!(matches!(result, Err(crate::error::Error::Csv(_))));
    }

    #[test]
    fn rename_column_is_by_exact_name() {
        let mut table = DataTable::from_csv(sample_csv().as_bytes()).unwrap();
        assert!(table.rename_column("Date", "timestamp"));
        assert!(!table.rename_column("date", "timestamp"));
        assert_eq!(table.columns()[0], "timestamp");
    }

    #[test]
    fn add_column_with_sees_current_row() {
        let mut table = DataTable::from_csv(sample_csv().as_bytes()).unwrap();
        let close_idx = table.column_index("Close").unwrap();
        table.add_column_with("double_close", |_, row| {
            Cell::Number(row[close_idx].to_f64().unwrap() * 2.0)
        });
        assert_eq!(table.cell(0, "double_close"), Some(&Cell::Number(14500.0)));
    }

    #[test]
    fn coercion_accepts_integer_and_float_text() {
        assert_eq!(Cell::Text("7".to_string()).to_f64().unwrap(), 7.0);
        assert_eq!(Cell::Text("7.5".to_string()).to_f64().unwrap(), 7.5);
        assert_eq!(Cell::Number(1.25).to_f64().unwrap(), 1.25);
        assert!(Cell::Text("n/a".to_string()).to_f64().is_err());
    }
}
