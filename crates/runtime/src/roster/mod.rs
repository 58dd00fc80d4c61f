mod error;
mod store;

pub use error::{Result, RosterError};
pub use store::{Clock, RosterStore};
