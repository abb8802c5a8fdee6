pub mod list;
pub mod todo;
pub mod urgency;
