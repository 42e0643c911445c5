//! CLI command implementations

pub mod config;
pub mod fetch;
pub mod run;
pub mod status;

pub use config::execute as config;
pub use fetch::execute as fetch;
pub use run::execute as run;
pub use status::execute as status;
