pub mod hook;
pub mod path;
pub mod show;
