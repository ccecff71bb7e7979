pub mod baseline;
pub mod defs;

pub use baseline::BaselineItineraryAgent;
pub use defs::*;
