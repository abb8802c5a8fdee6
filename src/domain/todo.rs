//! Todo entity.

use crate::domain::urgency::Urgency;

/// Default width of the id column in labels.
pub const DEFAULT_ID_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    pub description: String,
    pub urgency_level: Urgency,
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo. `None` urgency means the default level.
    pub fn new(id: u32, description: impl Into<String>, urgency_level: Option<Urgency>) -> Self {
        Self {
            id,
            description: description.into(),
            urgency_level: urgency_level.unwrap_or_default(),
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Right-aligned id padded to `id_width`, two spaces, then the description.
    /// Ids wider than the field overflow it.
    pub fn label(&self, id_width: usize) -> String {
        format!("{:>id_width$}  {}", self.id, self.description)
    }
}
