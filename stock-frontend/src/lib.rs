use action::ActionResult;
use error::AppError;
use event::Emitter;
use init::products::{load_products_from_file, LoadedProducts};
use inventory::InventoryStore;
use layout::{AppLayout, CommandLineLayout};
use model::{Model, PrintContent};
use settings::Settings;
use stock_keymap::message::KeySequence;
use terminal::TerminalWrapper;
use update::update;
use view::render_model;

mod action;
pub mod error;
mod event;
mod init;
mod inventory;
mod layout;
mod model;
pub mod settings;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let mut terminal = TerminalWrapper::start()?;
    let mut emitter = Emitter::start();

    let (loaded, load_failed) = match &settings.products_path {
        Some(path) => match load_products_from_file(path) {
            Ok(loaded) => (loaded, false),
            Err(error) => {
                tracing::error!("loading products from {:?} failed: {:?}", path, error);
                (LoadedProducts::default(), true)
            }
        },
        None => (LoadedProducts::default(), false),
    };

    let mut model = Model::new(&settings, InventoryStore::new(loaded.products));
    if load_failed {
        model.commandline.content = Some(PrintContent::Error(
            "No se pudieron cargar los productos".to_string(),
        ));
    } else if loaded.skipped > 0 {
        model.commandline.content = Some(PrintContent::Error(format!(
            "{} filas de productos omitidas",
            loaded.skipped
        )));
    }

    tracing::debug!("starting with model state: {:?}", model);

    let mut result = Vec::new();
    if let Err(error) = refresh(&mut terminal, &mut model, &KeySequence::None) {
        result.push(error);
    }

    while result.is_empty() {
        let envelope = match emitter.receiver.recv().await {
            Some(it) => it,
            None => break,
        };

        tracing::debug!("received messages: {:?}", envelope.messages);

        let today = chrono::Local::now().date_naive();
        let actions = update(&mut model, &envelope, today);

        emitter.set_current_mode(model.mode.clone()).await;

        match action::exec(&mut terminal, actions) {
            Ok(ActionResult::Quit) => break,
            Ok(ActionResult::Normal) => {}
            Err(error) => {
                result.push(error);
                break;
            }
        }

        if let Err(error) = refresh(&mut terminal, &mut model, &envelope.sequence) {
            result.push(error);
        }
    }

    if let Err(error) = emitter.shutdown().await {
        result.push(error);
    }

    terminal.shutdown()?;

    if result.is_empty() {
        Ok(())
    } else {
        Err(AppError::Aggregate(result))
    }
}

fn refresh(
    terminal: &mut TerminalWrapper,
    model: &mut Model,
    sequence: &KeySequence,
) -> Result<(), AppError> {
    let size = terminal.size()?;
    model.layout = AppLayout::new(size);
    model.commandline.layout = CommandLineLayout::new(
        model.layout.commandline,
        sequence.len_or_default(model.key_sequence.chars().count()),
    );

    stock_list::set_viewport(&mut model.list, model.layout.list);

    render_model(terminal, model)
}
