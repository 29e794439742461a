//! Model registration for the console.
//!
//! A [`ModelAdmin`] declares how a record type shows up: its URL slug, its
//! display names and the fields its list view surfaces. The index page lists
//! every entry of [`REGISTRY`]; the generic add/change/delete views hang off
//! the registration's URLs.

use cafe_catalog_core::{CoffeeField, CoffeeItem, CoffeeItemId};

use crate::components::data_table::{DataTableConfig, TableColumn};

/// Registration of a record type with the console.
#[derive(Debug, Clone, Copy)]
pub struct ModelAdmin {
    /// URL segment, e.g. `cafes`.
    pub slug: &'static str,
    /// Singular display name.
    pub verbose_name: &'static str,
    /// Plural display name.
    pub verbose_name_plural: &'static str,
    /// Fields shown as list view columns, in order.
    pub list_display: &'static [CoffeeField],
}

/// The catalog registration: list view shows name, price and quantity.
pub const CAFE_ADMIN: ModelAdmin = ModelAdmin {
    slug: "cafes",
    verbose_name: "cafe",
    verbose_name_plural: "cafes",
    list_display: &[CoffeeField::Name, CoffeeField::Price, CoffeeField::Quantity],
};

/// Every registered model, in index order.
pub const REGISTRY: &[ModelAdmin] = &[CAFE_ADMIN];

/// One list view row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeListRow {
    pub id: String,
    pub change_url: String,
    /// Cell values, one per `list_display` column.
    pub cells: Vec<String>,
}

impl ModelAdmin {
    /// Table configuration for the list view.
    #[must_use]
    pub fn table(&self) -> DataTableConfig {
        let empty = format!("No {} yet.", self.verbose_name_plural);
        self.list_display
            .iter()
            .fold(
                DataTableConfig::new(&format!("result_list_{}", self.slug)).empty_title(&empty),
                |table, field| table.column(TableColumn::new(field.key(), field.label())),
            )
    }

    /// List view row for one record.
    #[must_use]
    pub fn row(&self, item: &CoffeeItem) -> ChangeListRow {
        ChangeListRow {
            id: item.id.to_string(),
            change_url: self.change_url(item.id),
            cells: self
                .list_display
                .iter()
                .map(|field| item.display_value(*field))
                .collect(),
        }
    }

    /// `"1 cafe"`, `"3 cafes"`.
    #[must_use]
    pub fn count_label(&self, count: u64) -> String {
        let noun = if count == 1 {
            self.verbose_name
        } else {
            self.verbose_name_plural
        };
        format!("{count} {noun}")
    }

    #[must_use]
    pub fn changelist_url(&self) -> String {
        format!("/{}", self.slug)
    }

    #[must_use]
    pub fn add_url(&self) -> String {
        format!("/{}/add", self.slug)
    }

    #[must_use]
    pub fn change_url(&self, id: CoffeeItemId) -> String {
        format!("/{}/{id}/change", self.slug)
    }

    #[must_use]
    pub fn delete_url(&self, id: CoffeeItemId) -> String {
        format!("/{}/{id}/delete", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> CoffeeItem {
        CoffeeItem {
            id: CoffeeItemId::new(5),
            name: "Latte".to_string(),
            price: 3.75,
            quantity: 8,
            image_reference: "https://img.example.com/latte.jpg".to_string(),
        }
    }

    #[test]
    fn test_list_display_is_name_price_quantity() {
        let table = CAFE_ADMIN.table();
        let keys: Vec<_> = table.columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "price", "quantity"]);
        let labels: Vec<_> = table.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Name", "Price", "Quantity"]);
    }

    #[test]
    fn test_row_cells_follow_columns() {
        let row = CAFE_ADMIN.row(&latte());
        assert_eq!(row.cells, vec!["Latte", "3.75", "8"]);
        assert_eq!(row.id, "5");
        assert_eq!(row.change_url, "/cafes/5/change");
    }

    #[test]
    fn test_image_reference_not_listed() {
        let row = CAFE_ADMIN.row(&latte());
        assert!(row.cells.iter().all(|cell| !cell.contains("latte.jpg")));
    }

    #[test]
    fn test_urls() {
        let id = CoffeeItemId::new(12);
        assert_eq!(CAFE_ADMIN.changelist_url(), "/cafes");
        assert_eq!(CAFE_ADMIN.add_url(), "/cafes/add");
        assert_eq!(CAFE_ADMIN.delete_url(id), "/cafes/12/delete");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(CAFE_ADMIN.count_label(0), "0 cafes");
        assert_eq!(CAFE_ADMIN.count_label(1), "1 cafe");
        assert_eq!(CAFE_ADMIN.count_label(2), "2 cafes");
    }

    #[test]
    fn test_registry_contains_catalog() {
        assert_eq!(REGISTRY.len(), 1);
        assert_eq!(REGISTRY.first().map(|m| m.slug), Some("cafes"));
    }
}
