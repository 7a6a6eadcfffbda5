pub mod args;
pub mod menu;
pub mod print;
pub mod prompt;
pub mod table;
