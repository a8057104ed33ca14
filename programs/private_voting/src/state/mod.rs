pub mod ballot;
pub mod events;
pub mod factory;
pub mod voting;

pub use ballot::*;
pub use events::*;
pub use factory::*;
pub use voting::*;
