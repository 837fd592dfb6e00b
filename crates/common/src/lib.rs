pub mod utils;

pub use utils::logging::{init_from_config, init_logging_default, init_logging_json};
