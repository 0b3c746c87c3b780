//! CLI command handlers. Each command is in its own file.

mod card_input;
mod completions;
mod man;
mod render;
mod send;
mod token;

pub use card_input::build_card;
pub use completions::run_completions;
pub use man::run_man;
pub use render::run_render;
pub use send::run_send;
pub use token::run_token;
