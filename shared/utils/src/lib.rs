pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod validation;

pub use self::config::*;
pub use error::*;
pub use extract::*;
pub use logging::*;
pub use validation::*;
