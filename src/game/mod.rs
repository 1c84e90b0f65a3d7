//! Game flow: hidden sequence generation, guess parsing and session state

mod generator;
mod input;
mod session;

pub use generator::generate;
pub use input::{GuessInput, InputError};
pub use session::{Session, Turn};
