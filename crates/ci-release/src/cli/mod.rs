mod types;

pub use types::{Cli, Cmd};
