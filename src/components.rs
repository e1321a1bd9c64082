mod character;
pub use character::*;

mod character_list;
pub use character_list::*;

pub mod initiative;
