pub mod page;
pub mod snapshot;
pub mod target;

pub use page::*;
pub use target::*;
