pub mod command;
pub mod handler;

pub use command::{Command, Focus};
pub use handler::map_key;
