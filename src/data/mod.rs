pub mod valet;

pub use valet::{DEFAULT_URL, ValetClient, ValetConfig, parse_group, timeout_from_secs};
