mod date;
mod error;
mod identity;
mod pantry;
mod planner;
mod quantity;
mod recipe;
mod slot;

pub use date::*;
pub use error::*;
pub use identity::*;
pub use pantry::*;
pub use planner::*;
pub use quantity::*;
pub use recipe::*;
pub use slot::*;
