pub use load::*;
pub use reference::*;

pub mod errors;
mod load;
mod reference;
