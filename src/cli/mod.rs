pub mod args;
pub mod commands;
pub mod output;
pub mod router;
