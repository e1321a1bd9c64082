mod character;
pub use character::*;

mod initiative;
pub use initiative::*;

mod roster;
pub use roster::*;
