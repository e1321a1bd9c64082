pub mod components;
pub mod data;
pub mod logging;
pub mod page;
