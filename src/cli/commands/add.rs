//! `todo add` command.

use crate::cli::args::Options;
use crate::cli::commands::{save_and_render, Context, Handler};
use crate::domain::list::TodoList;
use crate::domain::todo::Todo;
use crate::error::TodoError;

pub struct Add;

impl Handler for Add {
    fn run(
        &self,
        args: &[String],
        options: &Options,
        todos: &mut TodoList,
        ctx: &Context<'_>,
    ) -> Result<String, TodoError> {
        let description = args.first().ok_or(TodoError::MissingArgument("description"))?;

        let id = todos.next_id().map_err(TodoError::IdsExhausted)?;
        let todo = Todo::new(id, description.as_str(), options.urgency_level);
        tracing::info!(id, urgency_level = %todo.urgency_level, "adding todo");
        todos.push(todo);

        save_and_render(todos, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::Fixture;
    use crate::domain::urgency::Urgency;

    #[test]
    fn add_to_empty_store() {
        let fx = Fixture::new();
        let out = fx.run(&Add, &["Buy milk"], &Options::default()).unwrap();
        assert_eq!(out, "    1  Buy milk");

        let saved = fx.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.get(1), Some(&Todo::new(1, "Buy milk", None)));
    }

    #[test]
    fn ids_increase_monotonically() {
        let fx = Fixture::new();
        for n in 1..=4 {
            let description = format!("Task {n}");
            fx.run(&Add, &[description.as_str()], &Options::default())
                .unwrap();
        }
        let ids: Vec<u32> = fx.saved().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn next_id_follows_highest() {
        let fx = Fixture::with(vec![Todo::new(9, "Old", None), Todo::new(4, "Older", None)]);
        fx.run(&Add, &["New"], &Options::default()).unwrap();
        assert_eq!(fx.saved().get(10).unwrap().description, "New");
    }

    #[test]
    fn add_with_urgency() {
        let fx = Fixture::new();
        let options = Options {
            urgency_level: Some(Urgency::Urgent),
            ..Options::default()
        };
        fx.run(&Add, &["Pay rent"], &options).unwrap();
        assert_eq!(fx.saved().get(1).unwrap().urgency_level, Urgency::Urgent);
    }

    #[test]
    fn output_hides_completed() {
        let mut done = Todo::new(1, "Done", None);
        done.completed = true;
        let fx = Fixture::with(vec![done]);
        let out = fx.run(&Add, &["Next"], &Options::default()).unwrap();
        assert_eq!(out, "    2  Next");
    }

    #[test]
    fn add_after_max_id_fails_without_writing() {
        let fx = Fixture::new();
        std::fs::write(
            fx.store.path(),
            r#"[{"id": 4294967295, "description": "big"}]"#,
        )
        .unwrap();
        let before = fx.raw();

        let err = fx.run(&Add, &["next"], &Options::default()).unwrap_err();
        assert!(matches!(err, TodoError::IdsExhausted(u32::MAX)));
        assert_eq!(fx.raw(), before);

        let saved = fx.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.get(u32::MAX).unwrap().description, "big");
    }

    #[test]
    fn missing_description_does_not_write() {
        let fx = Fixture::new();
        let before = fx.raw();
        let err = fx.run(&Add, &[], &Options::default()).unwrap_err();
        assert!(matches!(err, TodoError::MissingArgument("description")));
        assert_eq!(fx.raw(), before);

        // No id was consumed.
        fx.run(&Add, &["First"], &Options::default()).unwrap();
        assert!(fx.saved().contains(1));
    }
}
