pub mod commands;
pub mod logging;
pub mod prompt;

pub use commands::{generate, retrieve};
pub use prompt::Console;
