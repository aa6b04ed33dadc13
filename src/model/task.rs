use serde::{Deserialize, Serialize};

/// A top-level to-do item with an ordered list of subtasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique across the whole list, stable for the task's lifetime
    pub id: u64,
    /// Display text (never empty — enforced by the ops layer)
    pub text: String,
    pub completed: bool,
    /// Insertion order is display order
    pub subtasks: Vec<Subtask>,
}

/// A child item of exactly one task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    /// Unique within the parent's subtask list
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task with no subtasks
    pub fn new(id: u64, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
            subtasks: Vec::new(),
        }
    }

    /// Whether the task's completion is derived from its subtasks
    pub fn has_subtasks(&self) -> bool {
        !self.subtasks.is_empty()
    }

    /// True when every subtask is completed. Only meaningful for tasks
    /// with at least one subtask.
    pub fn all_subtasks_completed(&self) -> bool {
        self.subtasks.iter().all(|s| s.completed)
    }
}

impl Subtask {
    pub fn new(id: u64, text: String) -> Self {
        Subtask {
            id,
            text,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serde_field_names_are_stable() {
        let mut task = Task::new(7, "Buy milk".into());
        task.subtasks.push(Subtask::new(8, "oat".into()));

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["subtasks"][0]["id"], 8);
        assert_eq!(json["subtasks"][0]["text"], "oat");
        assert_eq!(json["subtasks"][0]["completed"], false);
    }

    #[test]
    fn round_trips_through_json() {
        let mut task = Task::new(1, "a".into());
        task.completed = true;
        task.subtasks.push(Subtask {
            id: 2,
            text: "b".into(),
            completed: true,
        });

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn all_subtasks_completed_on_empty_list() {
        let task = Task::new(1, "a".into());
        assert!(!task.has_subtasks());
        // Vacuously true; callers gate on has_subtasks()
        assert!(task.all_subtasks_completed());
    }
}
