pub mod shares;
pub mod types;

pub use shares::*;
pub use types::*;
