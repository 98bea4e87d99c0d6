//! Header-keyed rows built from a worksheet's value grid.

use std::collections::HashMap;

/// One data row of the worksheet, keyed by header name.
///
/// Only cells that carry a value are stored: blank cells, cells beyond the
/// end of a short row, and columns with a blank header are all absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Builds a row from `(column, value)` pairs. The first occurrence of a
    /// column wins, empty values are dropped.
    pub fn from_cells<I, K, V>(cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (column, value) in cells {
            let value = value.into();
            if value.is_empty() {
                continue;
            }
            map.entry(column.into()).or_insert(value);
        }
        Self { cells: map }
    }

    /// Returns the cell under `column`, or `None` if it is blank or missing.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Converts a value grid into rows, treating the first grid row as headers.
///
/// Header cells are trimmed; row cells are not. When two columns share a
/// header, the leftmost one is used. Rows keep their on-sheet order,
/// including rows that are entirely blank.
#[must_use]
pub fn rows_from_values(values: Vec<Vec<serde_json::Value>>) -> Vec<RawRow> {
    let mut grid = values.into_iter();
    let Some(header_row) = grid.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default().trim().to_owned())
        .collect();

    grid.map(|row| {
        RawRow::from_cells(
            headers
                .iter()
                .zip(row.iter())
                .filter(|(header, _)| !header.is_empty())
                .filter_map(|(header, cell)| cell_text(cell).map(|text| (header.clone(), text))),
        )
    })
    .collect()
}

fn cell_text(cell: &serde_json::Value) -> Option<String> {
    match cell {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
