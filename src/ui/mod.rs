pub mod list;
pub mod messages;
pub mod prompt;
