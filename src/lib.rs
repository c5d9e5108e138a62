pub mod cli;
pub mod client;
pub mod presenter;
pub mod utils;

pub use cli::*;
pub use client::*;
pub use presenter::*;
pub use utils::*;
