//! Data table component types.
//!
//! Column and empty-state configuration for list views in the console.

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier (used as the HTML `id`).
    pub table_id: String,
    /// Column definitions, in display order.
    pub columns: Vec<TableColumn>,
    /// Message shown when there are no rows.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            empty_title: "No items found".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the empty state title.
    #[must_use]
    pub fn empty_title(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_keys(table: &DataTableConfig) -> Vec<&str> {
        table.columns.iter().map(|c| c.key.as_str()).collect()
    }

    #[test]
    fn test_columns_keep_insertion_order() {
        let table = DataTableConfig::new("t")
            .column(TableColumn::new("b", "B"))
            .column(TableColumn::new("a", "A"));
        assert_eq!(column_keys(&table), vec!["b", "a"]);
    }

    #[test]
    fn test_empty_title_default_and_override() {
        assert_eq!(DataTableConfig::new("t").empty_title, "No items found");
        let table = DataTableConfig::new("t").empty_title("Nothing here");
        assert_eq!(table.empty_title, "Nothing here");
    }
}
