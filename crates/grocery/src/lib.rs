mod aggregate;
mod dto;
mod memory;
mod model;
mod pantry;
mod service;
mod store;
mod trips;

pub use aggregate::*;
pub use dto::*;
pub use memory::*;
pub use model::*;
pub use pantry::*;
pub use service::*;
pub use store::*;
pub use trips::*;
