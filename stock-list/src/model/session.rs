use chrono::NaiveDate;

use crate::{
    error::SaveError,
    message::{FocusDirection, SelectionDirection},
};

use super::record::{
    parse_date, Category, EquipmentType, InventoryRecord, Status, Utility, DATE_FORMAT,
};

const ENTRY_DATE_MAX_LENGTH: usize = 10;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EditField {
    #[default]
    Name,
    Category,
    Status,
    Equipment,
    Utility,
    Amount,
    EntryDate,
}

impl EditField {
    const ORDER: [EditField; 7] = [
        EditField::Name,
        EditField::Category,
        EditField::Status,
        EditField::Equipment,
        EditField::Utility,
        EditField::Amount,
        EditField::EntryDate,
    ];

    pub fn moved(&self, direction: &FocusDirection) -> Self {
        let position = Self::ORDER
            .iter()
            .position(|field| field == self)
            .unwrap_or_default();

        let len = Self::ORDER.len();
        let next = match direction {
            FocusDirection::Next => (position + 1) % len,
            FocusDirection::Previous => (position + len - 1) % len,
        };

        Self::ORDER[next]
    }
}

/// Editable copy of a single record. Exists only while the row at `index` is
/// in edit mode and is dropped on save, cancel and escape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditSession {
    pub index: usize,
    pub name: String,
    pub category: Option<Category>,
    pub used: bool,
    pub equipment: Option<EquipmentType>,
    pub good: bool,
    pub amount: u32,
    pub entry_date: String,
    pub focus: EditField,
}

impl EditSession {
    pub fn new(index: usize, record: &InventoryRecord) -> Self {
        Self {
            index,
            name: record.name.clone(),
            category: Some(record.category),
            used: record.status.is_used(),
            equipment: Some(record.equipment),
            good: record.utility.is_good(),
            amount: record.amount,
            entry_date: record.entry_date.format(DATE_FORMAT).to_string(),
            focus: EditField::default(),
        }
    }

    pub fn to_record(&self, today: NaiveDate) -> Result<InventoryRecord, SaveError> {
        let entry_date = parse_date(&self.entry_date);
        if matches!(entry_date, Some(date) if date > today) {
            return Err(SaveError::FutureEntryDate);
        }

        let (category, equipment, entry_date) = match (self.category, self.equipment, entry_date) {
            (Some(category), Some(equipment), Some(entry_date)) if !self.name.trim().is_empty() => {
                (category, equipment, entry_date)
            }
            _ => return Err(SaveError::IncompleteFields),
        };

        Ok(InventoryRecord {
            name: self.name.clone(),
            category,
            status: Status::from_used(self.used),
            equipment,
            utility: Utility::from_good(self.good),
            amount: self.amount,
            entry_date,
        })
    }

    pub fn amount_content(&self) -> String {
        if self.amount == 0 {
            String::new()
        } else {
            self.amount.to_string()
        }
    }

    pub fn move_focus(&mut self, direction: &FocusDirection) {
        self.focus = self.focus.moved(direction);
    }

    pub fn insert(&mut self, content: &str) {
        match self.focus {
            EditField::Name => self.name.push_str(content),
            EditField::Amount => {
                for digit in content.chars().filter_map(|c| c.to_digit(10)) {
                    if let Some(amount) = self
                        .amount
                        .checked_mul(10)
                        .and_then(|amount| amount.checked_add(digit))
                    {
                        self.amount = amount;
                    }
                }
            }
            EditField::EntryDate => {
                for c in content.chars() {
                    if self.entry_date.chars().count() >= ENTRY_DATE_MAX_LENGTH {
                        break;
                    }
                    if c.is_ascii_digit() || c == '-' {
                        self.entry_date.push(c);
                    }
                }
            }
            EditField::Category | EditField::Status | EditField::Equipment | EditField::Utility => {
                if content == " " {
                    self.change_selection(&SelectionDirection::Next);
                }
            }
        }
    }

    pub fn delete_char_before_cursor(&mut self) {
        match self.focus {
            EditField::Name => {
                self.name.pop();
            }
            EditField::Amount => self.amount /= 10,
            EditField::EntryDate => {
                self.entry_date.pop();
            }
            EditField::Category | EditField::Status | EditField::Equipment | EditField::Utility => {}
        }
    }

    pub fn change_selection(&mut self, direction: &SelectionDirection) {
        match self.focus {
            EditField::Category => {
                self.category = cycle(self.category, &Category::ALL, direction);
            }
            EditField::Equipment => {
                self.equipment = cycle(self.equipment, &EquipmentType::ALL, direction);
            }
            EditField::Status => self.used = !self.used,
            EditField::Utility => self.good = !self.good,
            EditField::Name | EditField::Amount | EditField::EntryDate => {}
        }
    }
}

// NOTE: None is the empty placeholder option in front of all values
fn cycle<T: Copy + PartialEq>(
    current: Option<T>,
    values: &[T],
    direction: &SelectionDirection,
) -> Option<T> {
    let options: Vec<Option<T>> = std::iter::once(None)
        .chain(values.iter().copied().map(Some))
        .collect();

    let position = options
        .iter()
        .position(|option| option == &current)
        .unwrap_or_default();

    let len = options.len();
    let next = match direction {
        SelectionDirection::Next => (position + 1) % len,
        SelectionDirection::Previous => (position + len - 1) % len,
    };

    options[next]
}

#[cfg(test)]
mod test {
    use super::*;

    fn record() -> InventoryRecord {
        InventoryRecord {
            name: "Mouse A".to_string(),
            category: Category::Sala1E,
            status: Status::New,
            equipment: EquipmentType::Mouse,
            utility: Utility::Good,
            amount: 3,
            entry_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
    }

    #[test]
    fn new_copies_all_fields() {
        let session = EditSession::new(4, &record());

        assert_eq!(4, session.index);
        assert_eq!("Mouse A", session.name);
        assert_eq!(Some(Category::Sala1E), session.category);
        assert!(!session.used);
        assert_eq!(Some(EquipmentType::Mouse), session.equipment);
        assert!(session.good);
        assert_eq!(3, session.amount);
        assert_eq!("2024-01-10", session.entry_date);
        assert_eq!(EditField::Name, session.focus);
    }

    #[test]
    fn unchanged_session_returns_source_record() {
        let session = EditSession::new(0, &record());
        assert_eq!(Ok(record()), session.to_record(today()));
    }

    #[test]
    fn to_record_rejects_future_entry_date() {
        let mut session = EditSession::new(0, &record());
        session.entry_date = "2024-01-12".to_string();

        assert_eq!(Err(SaveError::FutureEntryDate), session.to_record(today()));
    }

    #[test]
    fn to_record_accepts_today() {
        let mut session = EditSession::new(0, &record());
        session.entry_date = "2024-01-11".to_string();

        assert!(session.to_record(today()).is_ok());
    }

    #[test]
    fn to_record_rejects_whitespace_name() {
        let mut session = EditSession::new(0, &record());
        session.name = "   ".to_string();

        assert_eq!(Err(SaveError::IncompleteFields), session.to_record(today()));
    }

    #[test]
    fn to_record_rejects_placeholder_selections() {
        let mut session = EditSession::new(0, &record());
        session.category = None;
        assert_eq!(Err(SaveError::IncompleteFields), session.to_record(today()));

        let mut session = EditSession::new(0, &record());
        session.equipment = None;
        assert_eq!(Err(SaveError::IncompleteFields), session.to_record(today()));
    }

    #[test]
    fn to_record_rejects_partial_entry_date() {
        let mut session = EditSession::new(0, &record());
        session.entry_date = "2024-01".to_string();

        assert_eq!(Err(SaveError::IncompleteFields), session.to_record(today()));
    }

    #[test]
    fn future_date_is_checked_before_missing_fields() {
        let mut session = EditSession::new(0, &record());
        session.name = String::new();
        session.entry_date = "2030-01-01".to_string();

        assert_eq!(Err(SaveError::FutureEntryDate), session.to_record(today()));
    }

    #[test]
    fn checkboxes_reencode_to_labels() {
        let mut session = EditSession::new(0, &record());
        session.used = true;
        session.good = false;

        let record = session.to_record(today()).unwrap();
        assert_eq!("Usado", record.status.to_string());
        assert_eq!("Malo", record.utility.to_string());
    }

    #[test]
    fn amount_accepts_digits_only_and_hides_zero() {
        let mut session = EditSession::new(0, &record());
        session.focus = EditField::Amount;

        session.delete_char_before_cursor();
        assert_eq!(0, session.amount);
        assert_eq!("", session.amount_content());

        session.insert("1x2");
        assert_eq!(12, session.amount);
        assert_eq!("12", session.amount_content());
    }

    #[test]
    fn amount_ignores_overflowing_digits() {
        let mut session = EditSession::new(0, &record());
        session.focus = EditField::Amount;
        session.amount = u32::MAX / 10;

        session.insert("9");
        assert_eq!(u32::MAX / 10, session.amount);
    }

    #[test]
    fn entry_date_is_limited_to_iso_length() {
        let mut session = EditSession::new(0, &record());
        session.focus = EditField::EntryDate;

        session.insert("1");
        assert_eq!("2024-01-10", session.entry_date);

        session.delete_char_before_cursor();
        session.insert("1a");
        assert_eq!("2024-01-11", session.entry_date);
    }

    #[test]
    fn selection_cycles_through_placeholder() {
        let mut session = EditSession::new(0, &record());
        session.focus = EditField::Category;

        session.change_selection(&SelectionDirection::Previous);
        assert_eq!(None, session.category);

        session.change_selection(&SelectionDirection::Previous);
        assert_eq!(Some(Category::Sala2F), session.category);

        session.change_selection(&SelectionDirection::Next);
        session.change_selection(&SelectionDirection::Next);
        assert_eq!(Some(Category::Sala1E), session.category);
    }

    #[test]
    fn space_toggles_focused_checkbox() {
        let mut session = EditSession::new(0, &record());
        session.focus = EditField::Status;

        session.insert(" ");
        assert!(session.used);

        session.focus = EditField::Name;
        session.insert(" ");
        assert_eq!("Mouse A ", session.name);
    }

    #[test]
    fn focus_wraps_around() {
        assert_eq!(
            EditField::EntryDate,
            EditField::Name.moved(&FocusDirection::Previous)
        );
        assert_eq!(
            EditField::Name,
            EditField::EntryDate.moved(&FocusDirection::Next)
        );
    }
}
