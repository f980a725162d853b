//! Command execution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{Config, StorageBackend};
use crate::features::cart::{sample_products, CartAction, CartReducer, CartState, Product};
use crate::features::counter::{CounterAction, CounterReducer};
use crate::features::todo::{TodoAction, TodoReducer};
use crate::features::user::{UserAction, UserReducer};
use crate::mvi::{ActionEnvelope, Reducer};
use crate::storage::{hydrate, FileStorage, KeyValueStorage, MemoryStorage};
use crate::store::{LoggerMiddleware, PersistMiddleware, Store};

use super::render::{render_cart, render_counter, render_todo, render_user};
use super::{CartCommand, Cli, Command, CounterCommand, Feature, TodoCommand, UserCommand};

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Product {0} is not in the catalog; pass --name and --price")]
    UnknownProduct(u64),

    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error("Failed to encode state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// What one invocation does to a store.
enum Step<A> {
    Actions(Vec<A>),
    Envelope(ActionEnvelope),
}

/// Execute `cli` against storage described by `config` and return the text
/// to print.
pub fn run(cli: Cli, config: &Config) -> Result<String, CliError> {
    let storage = open_storage(config);
    let json = cli.json;

    match cli.command {
        Command::Cart(CartCommand::Catalog) => Ok(render_catalog()),
        Command::Cart(cmd) => {
            let step = Step::Actions(cart_actions(cmd)?);
            execute::<CartReducer>(config, &storage, Feature::Cart, step, json, render_cart)
        }
        Command::Todo(cmd) => {
            let step = Step::Actions(todo_actions(cmd));
            execute::<TodoReducer>(config, &storage, Feature::Todo, step, json, render_todo)
        }
        Command::Counter(cmd) => {
            let step = Step::Actions(counter_actions(cmd));
            execute::<CounterReducer>(config, &storage, Feature::Counter, step, json, render_counter)
        }
        Command::User(cmd) => {
            let step = Step::Actions(user_actions(cmd));
            execute::<UserReducer>(config, &storage, Feature::User, step, json, render_user)
        }
        Command::Dispatch {
            feature,
            kind,
            payload,
        } => {
            let envelope = match payload {
                Some(raw) => {
                    let value = serde_json::from_str(&raw).map_err(CliError::InvalidPayload)?;
                    ActionEnvelope::with_payload(kind, value)
                }
                None => ActionEnvelope::new(kind),
            };
            dispatch_raw(config, &storage, feature, envelope, json)
        }
    }
}

fn dispatch_raw(
    config: &Config,
    storage: &Arc<dyn KeyValueStorage>,
    feature: Feature,
    envelope: ActionEnvelope,
    json: bool,
) -> Result<String, CliError> {
    match feature {
        Feature::Cart => execute::<CartReducer>(
            config,
            storage,
            feature,
            Step::Envelope(envelope),
            json,
            render_cart,
        ),
        Feature::Todo => execute::<TodoReducer>(
            config,
            storage,
            feature,
            Step::Envelope(envelope),
            json,
            render_todo,
        ),
        Feature::Counter => execute::<CounterReducer>(
            config,
            storage,
            feature,
            Step::Envelope(envelope),
            json,
            render_counter,
        ),
        Feature::User => execute::<UserReducer>(
            config,
            storage,
            feature,
            Step::Envelope(envelope),
            json,
            render_user,
        ),
    }
}

fn open_storage(config: &Config) -> Arc<dyn KeyValueStorage> {
    match config.storage.backend {
        StorageBackend::File => Arc::new(FileStorage::new(config.storage.data_dir())),
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
    }
}

/// Build a feature store: hydrated from storage, logged, and persisted
/// when enabled.
fn open_store<R>(config: &Config, storage: &Arc<dyn KeyValueStorage>, feature: Feature) -> Store<R>
where
    R: Reducer,
    R::State: Serialize + DeserializeOwned,
{
    let key = config.persist.storage_key(feature.as_str());
    let initial: R::State = hydrate(storage.as_ref(), &key);

    let store = Store::<R>::new(initial)
        .named(feature.as_str())
        .with_middleware(LoggerMiddleware::new(feature.as_str()));

    if config.persist.enabled {
        store.with_middleware(PersistMiddleware::new(Arc::clone(storage), key))
    } else {
        store
    }
}

fn execute<R>(
    config: &Config,
    storage: &Arc<dyn KeyValueStorage>,
    feature: Feature,
    step: Step<R::Action>,
    json: bool,
    render: fn(&R::State) -> String,
) -> Result<String, CliError>
where
    R: Reducer,
    R::State: Serialize + DeserializeOwned,
    R::Action: DeserializeOwned,
{
    let store = open_store::<R>(config, storage, feature);

    let changes = Arc::new(AtomicUsize::new(0));
    let subscription = store.subscribe({
        let changes = Arc::clone(&changes);
        move || {
            changes.fetch_add(1, Ordering::SeqCst);
        }
    });

    let mut out = String::new();
    match step {
        Step::Actions(actions) if actions.is_empty() => {}
        Step::Actions(actions) => {
            store.dispatch_batch(actions);
            if changes.load(Ordering::SeqCst) == 0 {
                out.push_str("(no change)\n");
            }
        }
        Step::Envelope(envelope) => {
            if !store.dispatch_envelope(&envelope) {
                out.push_str(&format!("(ignored unknown action '{}')\n", envelope.kind));
            } else if changes.load(Ordering::SeqCst) == 0 {
                out.push_str("(no change)\n");
            }
        }
    }
    subscription.unsubscribe();
    tracing::debug!(
        store = %store.name(),
        notifications = changes.load(Ordering::SeqCst),
        "Command applied"
    );

    let state = store.get_state();
    if json {
        let encoded = serde_json::to_string_pretty(&*state).map_err(CliError::Encode)?;
        out.push_str(&encoded);
        out.push('\n');
    } else {
        out.push_str(&render(&state));
    }
    Ok(out)
}

fn cart_actions(cmd: CartCommand) -> Result<Vec<CartAction>, CliError> {
    let action = match cmd {
        CartCommand::Add { id, name, price } => CartAction::AddItem(resolve_product(id, name, price)?),
        CartCommand::Inc { id } => CartAction::Increment(id),
        CartCommand::Dec { id } => CartAction::Decrement(id),
        CartCommand::Remove { id } => CartAction::RemoveItem(id),
        CartCommand::Discount { discount } => CartAction::ApplyDiscount(discount),
        CartCommand::Note { text } => CartAction::SetNote(text),
        CartCommand::Clear => CartAction::ClearCart,
        CartCommand::Catalog | CartCommand::Show => return Ok(Vec::new()),
    };
    Ok(vec![action])
}

/// Fill missing name/price from the catalog.
fn resolve_product(id: u64, name: Option<String>, price: Option<f64>) -> Result<Product, CliError> {
    let catalog = sample_products().into_iter().find(|p| p.id == id);
    let seeded = CartState::sample().items.into_iter().find(|item| item.id == id);

    let fallback = catalog.or_else(|| {
        seeded.map(|item| Product {
            id: item.id,
            name: item.name,
            price: item.price,
        })
    });

    match (name, price, fallback) {
        (Some(name), Some(price), _) => Ok(Product { id, name, price }),
        (name, price, Some(known)) => Ok(Product {
            id,
            name: name.unwrap_or(known.name),
            price: price.unwrap_or(known.price),
        }),
        _ => Err(CliError::UnknownProduct(id)),
    }
}

fn render_catalog() -> String {
    sample_products()
        .iter()
        .map(|p| format!("#{} {} @ {:.2}\n", p.id, p.name, p.price))
        .collect()
}

fn todo_actions(cmd: TodoCommand) -> Vec<TodoAction> {
    match cmd {
        TodoCommand::Input { text } => vec![TodoAction::SetInput(text)],
        TodoCommand::Add { text: Some(text) } => {
            vec![TodoAction::SetInput(text), TodoAction::AddTodo]
        }
        TodoCommand::Add { text: None } => vec![TodoAction::AddTodo],
        TodoCommand::Toggle { id } => vec![TodoAction::ToggleTodo(id)],
        TodoCommand::Delete { id } => vec![TodoAction::DeleteTodo(id)],
        TodoCommand::Filter { filter } => vec![TodoAction::SetFilter(filter)],
        TodoCommand::ClearCompleted => vec![TodoAction::ClearCompleted],
        TodoCommand::Show => Vec::new(),
    }
}

fn counter_actions(cmd: CounterCommand) -> Vec<CounterAction> {
    match cmd {
        CounterCommand::Inc => vec![CounterAction::Increment],
        CounterCommand::Dec => vec![CounterAction::Decrement],
        CounterCommand::Reset => vec![CounterAction::Reset],
        CounterCommand::Show => Vec::new(),
    }
}

fn user_actions(cmd: UserCommand) -> Vec<UserAction> {
    match cmd {
        UserCommand::Login { name } => vec![UserAction::Login(name)],
        UserCommand::Logout => vec![UserAction::Logout],
        UserCommand::Rename { name } => vec![UserAction::UpdateName(name)],
        UserCommand::Show => Vec::new(),
    }
}
