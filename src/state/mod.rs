//! Application state module

mod form;
mod screen_state;
mod snackbar;
mod store;
mod validation;

pub use form::*;
pub use screen_state::*;
pub use snackbar::*;
pub use store::*;
pub use validation::*;
