/// Core functionality modules
///
/// Contains the command interpreter, its text renderers, the read-only
/// record store it queries, and the seeder that fills that store.

pub mod interpreter;
pub mod render;
pub mod seeder;
pub mod store;

pub use interpreter::{normalize, Command, CommandInterpreter, CommandResponse, TerminalProfile};
pub use seeder::{SeedReport, Seeder};
pub use store::RecordStore;
