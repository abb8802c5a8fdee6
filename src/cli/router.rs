//! Maps the command token to its handler.

use crate::cli::args::Options;
use crate::cli::commands::{add, complete, delete, edit, list, Context, Handler};
use crate::domain::list::TodoList;
use crate::error::TodoError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    List,
    Add,
    Complete,
    Edit,
    Delete,
}

impl FromStr for CommandName {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "complete" => Ok(Self::Complete),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            _ => Err(TodoError::UnknownCommand(s.to_string())),
        }
    }
}

impl CommandName {
    /// `list` when no command token was given.
    pub fn resolve(token: Option<&str>) -> Result<Self, TodoError> {
        token.map_or(Ok(Self::List), |t| t.parse())
    }

    pub fn handler(self) -> &'static dyn Handler {
        match self {
            Self::List => &list::List,
            Self::Add => &add::Add,
            Self::Complete => &complete::Complete,
            Self::Edit => &edit::Edit,
            Self::Delete => &delete::Delete,
        }
    }
}

/// Run `command` against the loaded collection.
pub fn dispatch(
    command: CommandName,
    args: &[String],
    options: &Options,
    todos: &mut TodoList,
    ctx: &Context<'_>,
) -> Result<String, TodoError> {
    tracing::debug!(?command, ?args, ?options, "dispatching command");
    command.handler().run(args, options, todos, ctx)
}
