pub mod coordinator;
pub mod core;
pub mod count;
pub mod error;
pub mod key;


pub use self::coordinator::*;
pub use self::core::*;
pub use self::count::*;
pub use self::error::*;
pub use self::key::*;
