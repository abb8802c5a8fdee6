//! Command handlers.
//!
//! Every handler validates its arguments and locates its target before
//! touching the collection, so a failed command never reaches the store.

pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;

use crate::cli::args::Options;
use crate::cli::output::{self, OutputFormat};
use crate::config::Config;
use crate::domain::list::TodoList;
use crate::domain::todo::Todo;
use crate::error::TodoError;
use crate::storage::store::TodoStore;

/// Everything a handler needs besides its arguments and the collection.
pub struct Context<'a> {
    pub config: &'a Config,
    pub store: &'a TodoStore,
    pub format: OutputFormat,
}

impl Context<'_> {
    pub fn render<'t>(
        &self,
        todos: impl IntoIterator<Item = &'t Todo>,
    ) -> Result<String, TodoError> {
        output::format_todo_list(todos, self.config, self.format)
    }
}

/// One CLI command.
pub trait Handler {
    /// Run against the loaded collection and return the text to print.
    fn run(
        &self,
        args: &[String],
        options: &Options,
        todos: &mut TodoList,
        ctx: &Context<'_>,
    ) -> Result<String, TodoError>;
}

/// Parse the leading positional argument as a todo id.
pub(crate) fn parse_id(args: &[String]) -> Result<u32, TodoError> {
    let raw = args.first().ok_or(TodoError::MissingArgument("id"))?;
    raw.trim()
        .parse()
        .map_err(|_| TodoError::InvalidId(raw.clone()))
}

/// Look up the todo named by the leading positional argument.
pub(crate) fn find_todo<'l>(
    args: &[String],
    todos: &'l mut TodoList,
) -> Result<&'l mut Todo, TodoError> {
    let id = parse_id(args)?;
    todos.get_mut(id).ok_or(TodoError::NotFound(id))
}

/// Persist the collection and render what is still active.
pub(crate) fn save_and_render(todos: &TodoList, ctx: &Context<'_>) -> Result<String, TodoError> {
    ctx.store.save(todos)?;
    ctx.render(todos.active())
}
