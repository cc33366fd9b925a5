use chrono::NaiveDate;

use crate::model::record::{parse_date, InventoryRecord};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterField {
    Search,
    StartDate,
    EndDate,
}

/// Search term and optional date bounds. Bounds are kept as typed and only
/// take effect once they parse as a complete iso date.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub start_date: String,
    pub end_date: String,
}

impl FilterState {
    pub fn clear(&mut self) {
        self.search.clear();
        self.start_date.clear();
        self.end_date.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.start_date.is_empty() && self.end_date.is_empty()
    }

    pub fn get(&self, field: &FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::StartDate => &self.start_date,
            FilterField::EndDate => &self.end_date,
        }
    }

    pub fn get_mut(&mut self, field: &FilterField) -> &mut String {
        match field {
            FilterField::Search => &mut self.search,
            FilterField::StartDate => &mut self.start_date,
            FilterField::EndDate => &mut self.end_date,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    pub fn matches(&self, record: &InventoryRecord) -> bool {
        matches_search(&self.search, record) && matches_date_range(self, record)
    }

    /// Order preserving view over `products`. Every entry keeps the index of
    /// the record inside `products`.
    pub fn apply<'a>(&self, products: &'a [InventoryRecord]) -> Vec<(usize, &'a InventoryRecord)> {
        products
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .collect()
    }
}

fn matches_search(search: &str, record: &InventoryRecord) -> bool {
    let search = search.to_lowercase();
    if search.is_empty() {
        return true;
    }

    record.name.to_lowercase().contains(&search)
        || record.category.to_string().to_lowercase().contains(&search)
        || record.status.to_string().to_lowercase().contains(&search)
}

fn matches_date_range(filter: &FilterState, record: &InventoryRecord) -> bool {
    let after_start = filter
        .start()
        .map_or(true, |start| record.entry_date >= start);

    let before_end = filter.end().map_or(true, |end| record.entry_date <= end);

    after_start && before_end
}

#[cfg(test)]
mod test {
    use crate::model::record::{Category, EquipmentType, Status, Utility};

    use super::*;

    fn record(name: &str, category: Category, status: Status, date: &str) -> InventoryRecord {
        InventoryRecord {
            name: name.to_string(),
            category,
            status,
            equipment: EquipmentType::Mouse,
            utility: Utility::Good,
            amount: 1,
            entry_date: parse_date(date).unwrap(),
        }
    }

    fn products() -> Vec<InventoryRecord> {
        vec![
            record("Mouse A", Category::Sala1E, Status::New, "2024-01-10"),
            record("Pantalla B", Category::LabSoftware, Status::Used, "2024-01-03"),
            record("Teclado C", Category::Sala2F, Status::New, "2024-01-05"),
            record("Mouse D", Category::Sala1F, Status::Used, "2023-12-24"),
        ]
    }

    fn indexes(filtered: &[(usize, &InventoryRecord)]) -> Vec<usize> {
        filtered.iter().map(|(index, _)| *index).collect()
    }

    #[test]
    fn empty_filter_returns_all_in_order() {
        let products = products();
        let filter = FilterState::default();

        assert_eq!(vec![0, 1, 2, 3], indexes(&filter.apply(&products)));
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let products = vec![record("Mouse A", Category::Sala1E, Status::New, "2024-01-10")];
        let mut filter = FilterState {
            search: "mouse".to_string(),
            ..Default::default()
        };

        assert_eq!(vec![0], indexes(&filter.apply(&products)));

        filter.search = "keyboard".to_string();
        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn search_matches_category_and_status_labels() {
        let products = products();

        let filter = FilterState {
            search: "lab.".to_string(),
            ..Default::default()
        };
        assert_eq!(vec![1], indexes(&filter.apply(&products)));

        let filter = FilterState {
            search: "USADO".to_string(),
            ..Default::default()
        };
        assert_eq!(vec![1, 3], indexes(&filter.apply(&products)));
    }

    #[test]
    fn date_range_is_inclusive() {
        let products = vec![
            record("A", Category::Sala1E, Status::New, "2024-01-10"),
            record("B", Category::Sala1E, Status::New, "2024-01-03"),
            record("C", Category::Sala1E, Status::New, "2024-01-05"),
            record("D", Category::Sala1E, Status::New, "2024-01-01"),
        ];
        let filter = FilterState {
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-05".to_string(),
            ..Default::default()
        };

        assert_eq!(vec![1, 2, 3], indexes(&filter.apply(&products)));
    }

    #[test]
    fn single_bounds_filter_one_side() {
        let products = products();

        let filter = FilterState {
            start_date: "2024-01-05".to_string(),
            ..Default::default()
        };
        assert_eq!(vec![0, 2], indexes(&filter.apply(&products)));

        let filter = FilterState {
            end_date: "2024-01-03".to_string(),
            ..Default::default()
        };
        assert_eq!(vec![1, 3], indexes(&filter.apply(&products)));
    }

    #[test]
    fn inverted_bounds_are_not_corrected() {
        let products = products();
        let filter = FilterState {
            start_date: "2024-01-10".to_string(),
            end_date: "2024-01-01".to_string(),
            ..Default::default()
        };

        assert!(filter.apply(&products).is_empty());
    }

    #[test]
    fn incomplete_bound_behaves_as_unset() {
        let products = products();
        let filter = FilterState {
            start_date: "2024-01".to_string(),
            ..Default::default()
        };

        assert_eq!(4, filter.apply(&products).len());
    }

    #[test]
    fn search_and_dates_must_both_match() {
        let products = products();
        let filter = FilterState {
            search: "mouse".to_string(),
            start_date: "2024-01-01".to_string(),
            ..Default::default()
        };

        assert_eq!(vec![0], indexes(&filter.apply(&products)));
    }

    #[test]
    fn apply_is_idempotent_and_leaves_products_untouched() {
        let products = products();
        let before = products.clone();
        let filter = FilterState {
            search: "a".to_string(),
            end_date: "2024-01-05".to_string(),
            ..Default::default()
        };

        let first = filter.apply(&products);
        let second = filter.apply(&products);

        assert_eq!(first, second);
        assert_eq!(before, products);
    }

    #[test]
    fn clear_restores_unfiltered_view() {
        let products = products();
        let mut filter = FilterState {
            search: "zzz".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-02".to_string(),
        };
        assert!(filter.apply(&products).is_empty());

        filter.clear();

        assert!(filter.is_empty());
        assert_eq!(vec![0, 1, 2, 3], indexes(&filter.apply(&products)));
    }
}
