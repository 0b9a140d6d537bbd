//! Command implementations for the cmdshelf CLI
//!
//! Each subcommand lives in its own module and works on the
//! [`CollectionStore`](cmdshelf_core::CollectionStore) opened by `run`.

mod add;
mod collections;
mod create_collection;
mod export;
mod import;
mod list;
mod pick;
mod search;
mod set_default;

pub use add::execute as add_command;
pub use collections::execute as list_collections;
pub use create_collection::execute as create_collection;
pub use export::execute as export_collections;
pub use import::execute as import_collections;
pub use list::execute as list_commands;
pub use pick::run as pick_and_act;
pub use search::execute as search_commands;
pub use set_default::execute as set_default;
