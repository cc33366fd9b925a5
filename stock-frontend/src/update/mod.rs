use chrono::NaiveDate;
use stock_keymap::message::{KeySequence, KeymapMessage};
use stock_list::model::Mode;

use crate::{
    action::Action,
    event::{Envelope, Message},
    model::Model,
};

mod list;

#[tracing::instrument(skip(model, envelope))]
pub fn update(model: &mut Model, envelope: &Envelope, today: NaiveDate) -> Vec<Action> {
    match &envelope.sequence {
        KeySequence::Completed(_) => model.key_sequence.clear(),
        KeySequence::Changed(sequence) => model.key_sequence = sequence.to_owned(),
        KeySequence::None => {}
    };

    let actions = envelope
        .messages
        .iter()
        .flat_map(|message| update_with_message(model, message, today))
        .collect();

    model.mode = get_current_mode(model);

    actions
}

fn update_with_message(model: &mut Model, message: &Message, today: NaiveDate) -> Vec<Action> {
    match message {
        Message::Keymap(KeymapMessage::DismissAlert) => {
            model.alert = None;
            Vec::new()
        }
        Message::Keymap(KeymapMessage::List(message)) => list::update(model, message, today),
        Message::Keymap(KeymapMessage::Quit) => vec![Action::Quit],
        Message::Resize(x, y) => vec![Action::Resize(*x, *y)],
    }
}

// NOTE: a pending alert shadows the list mode until dismissed
fn get_current_mode(model: &Model) -> Mode {
    if model.alert.is_some() {
        Mode::Alert
    } else {
        model.list.mode()
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use stock_keymap::message::{KeySequence, KeymapMessage};
    use stock_list::{
        filter::FilterField,
        message::{CursorDirection, ListMessage, TextModification},
        model::{
            record::{Category, EquipmentType, InventoryRecord, Status, Utility},
            Mode,
        },
        Inventory,
    };

    use crate::{
        action::Action,
        event::{Envelope, Message},
        inventory::InventoryStore,
        model::{Model, PrintContent},
        settings::Settings,
    };

    fn record(name: &str, date: (i32, u32, u32)) -> InventoryRecord {
        InventoryRecord {
            name: name.to_string(),
            category: Category::Sala1E,
            status: Status::New,
            equipment: EquipmentType::Mouse,
            utility: Utility::Good,
            amount: 3,
            entry_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn model() -> Model {
        let inventory = InventoryStore::new(vec![
            record("Mouse A", (2024, 1, 10)),
            record("Pantalla B", (2024, 1, 3)),
            record("Mouse C", (2024, 1, 5)),
        ]);

        Model::new(&Settings::default(), inventory)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
    }

    fn envelope(messages: Vec<ListMessage>) -> Envelope {
        Envelope {
            messages: messages
                .into_iter()
                .map(|message| Message::Keymap(KeymapMessage::List(message)))
                .collect(),
            sequence: KeySequence::Completed(String::new()),
        }
    }

    fn send(model: &mut Model, messages: Vec<ListMessage>, today: NaiveDate) -> Vec<Action> {
        super::update(model, &envelope(messages), today)
    }

    #[test]
    fn future_entry_date_raises_alert_and_blocks_list() {
        let mut model = model();
        let yesterday = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();

        send(&mut model, vec![ListMessage::Edit, ListMessage::Save], yesterday);

        assert_eq!(
            Some("La fecha de ingreso no puede ser futura.".to_string()),
            model.alert
        );
        assert_eq!(Mode::Alert, model.mode);
        assert!(model.list.session().is_some());

        send(&mut model, vec![ListMessage::Cancel], yesterday);
        assert!(model.list.session().is_some());

        let dismiss = Envelope {
            messages: vec![Message::Keymap(KeymapMessage::DismissAlert)],
            sequence: KeySequence::Completed("<esc>".to_string()),
        };
        super::update(&mut model, &dismiss, yesterday);

        assert_eq!(None, model.alert);
        assert_eq!(Mode::Edit, model.mode);
        assert_eq!(3, model.inventory.products().len());
    }

    #[test]
    fn save_commits_and_reports() {
        let mut model = model();

        send(
            &mut model,
            vec![
                ListMessage::Edit,
                ListMessage::Modification(TextModification::Insert("X".to_string())),
                ListMessage::Save,
            ],
            today(),
        );

        assert_eq!("Mouse AX", model.inventory.products()[0].name);
        assert_eq!(Mode::Navigation, model.mode);
        assert_eq!(
            Some(PrintContent::Information("Producto guardado.".to_string())),
            model.commandline.content
        );
    }

    #[test]
    fn delete_in_filtered_view_removes_source_record() {
        let mut model = model();

        send(
            &mut model,
            vec![
                ListMessage::ChangeMode(Mode::Navigation, Mode::Prompt(FilterField::Search)),
                ListMessage::Modification(TextModification::Insert("mouse".to_string())),
                ListMessage::ChangeMode(Mode::Prompt(FilterField::Search), Mode::Navigation),
                ListMessage::MoveCursor(1, CursorDirection::Down),
                ListMessage::Delete,
            ],
            today(),
        );

        let names: Vec<_> = model
            .inventory
            .products()
            .iter()
            .map(|product| product.name.as_str())
            .collect();

        assert_eq!(vec!["Mouse A", "Pantalla B"], names);
        assert_eq!(
            Some(PrintContent::Information("Producto eliminado.".to_string())),
            model.commandline.content
        );
    }

    #[test]
    fn mode_follows_prompt_and_session() {
        let mut model = model();

        send(
            &mut model,
            vec![ListMessage::ChangeMode(
                Mode::Navigation,
                Mode::Prompt(FilterField::StartDate),
            )],
            today(),
        );
        assert_eq!(Mode::Prompt(FilterField::StartDate), model.mode);

        send(&mut model, vec![ListMessage::Edit], today());
        assert_eq!(Mode::Edit, model.mode);

        send(&mut model, vec![ListMessage::Cancel], today());
        assert_eq!(Mode::Navigation, model.mode);
    }

    #[test]
    fn key_sequence_tracks_pending_keys() {
        let mut model = model();

        let pending = Envelope {
            messages: Vec::new(),
            sequence: KeySequence::Changed("d".to_string()),
        };
        super::update(&mut model, &pending, today());
        assert_eq!("d", model.key_sequence);

        send(&mut model, vec![ListMessage::Delete], today());
        assert!(model.key_sequence.is_empty());
    }

    #[test]
    fn quit_and_resize_become_actions() {
        let mut model = model();

        let envelope = Envelope {
            messages: vec![
                Message::Resize(80, 24),
                Message::Keymap(KeymapMessage::Quit),
            ],
            sequence: KeySequence::None,
        };

        assert_eq!(
            vec![Action::Resize(80, 24), Action::Quit],
            super::update(&mut model, &envelope, today())
        );
    }
}
