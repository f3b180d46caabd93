pub mod filters;
pub mod trade;

pub use filters::*;
pub use trade::*;
