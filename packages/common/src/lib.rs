pub mod clock;
pub mod id;
pub mod store;

pub use clock::*;
pub use id::*;
pub use store::*;
