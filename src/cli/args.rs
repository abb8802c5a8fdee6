//! Command-line argument definitions using clap derive.

use crate::domain::urgency::Urgency;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "A personal todo tracker with urgency levels",
    after_help = "Commands:\n  list                      Show active todos (default)\n  add <description>         Add a todo\n  complete <id>             Mark a todo as completed\n  edit <id> [description]   Change description and/or urgency\n  delete <id>               Remove a todo"
)]
pub struct Cli {
    /// Command to run: list, add, complete, edit or delete.
    pub command: Option<String>,

    /// Arguments for the command.
    pub args: Vec<String>,

    /// Set urgency to normal.
    #[arg(short, long, overrides_with_all = ["urgent", "chill"])]
    pub normal: bool,

    /// Set urgency to urgent.
    #[arg(short, long, overrides_with_all = ["normal", "chill"])]
    pub urgent: bool,

    /// Set urgency to chill.
    #[arg(short, long, overrides_with_all = ["normal", "urgent"])]
    pub chill: bool,

    /// Include completed todos when listing.
    #[arg(short = 'a', long = "show-all")]
    pub show_all: bool,

    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Options shared by every command handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub urgency_level: Option<Urgency>,
    pub show_all: bool,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        // The urgency flags override each other, so at most one is set.
        let urgency_level = if cli.urgent {
            Some(Urgency::Urgent)
        } else if cli.chill {
            Some(Urgency::Chill)
        } else if cli.normal {
            Some(Urgency::Normal)
        } else {
            None
        };
        Self {
            urgency_level,
            show_all: cli.show_all,
        }
    }
}
