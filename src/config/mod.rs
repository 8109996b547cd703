mod defaults;
mod io;
mod schema;
mod validate;


pub use io::{config_path, load_config};
pub use schema::{Config, StatusPageSettings};
pub use validate::ConfigError;
