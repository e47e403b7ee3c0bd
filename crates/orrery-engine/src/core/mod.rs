pub mod body;
pub mod catalog;
pub mod orbit;
pub mod table;
pub mod time;
