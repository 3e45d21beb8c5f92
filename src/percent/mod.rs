pub mod core;
pub mod table;


pub use self::core::*;
pub use self::table::*;
