use crate::model::task::{Subtask, Task};

/// Error type for task operations.
///
/// The TUI never surfaces these — it only issues actions against items it is
/// currently rendering, so every `Err` is treated as a no-op. Library callers
/// get the explicit condition instead.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(u64),
    #[error("subtask not found: {0}")]
    SubtaskNotFound(u64),
    #[error("text is empty")]
    EmptyText,
    #[error("invalid position: {0}")]
    InvalidPosition(usize),
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Monotonic id source for tasks and subtasks.
///
/// Seeded from the highest id present at load, so ids stay unique across
/// runs without any clock involvement.
#[derive(Debug, Clone)]
pub struct IdGen {
    next: u64,
}

impl IdGen {
    pub fn new() -> Self {
        IdGen { next: 1 }
    }

    /// Seed from an existing task list: the next id is one past the highest
    /// task or subtask id found.
    pub fn seeded_from(tasks: &[Task]) -> Self {
        let max = tasks
            .iter()
            .flat_map(|t| std::iter::once(t.id).chain(t.subtasks.iter().map(|s| s.id)))
            .max()
            .unwrap_or(0);
        IdGen { next: max + 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        IdGen::new()
    }
}

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

pub fn find_task(tasks: &[Task], task_id: u64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == task_id)
}

pub fn find_task_mut(tasks: &mut [Task], task_id: u64) -> Option<&mut Task> {
    tasks.iter_mut().find(|t| t.id == task_id)
}

fn task_mut(tasks: &mut [Task], task_id: u64) -> Result<&mut Task, TaskError> {
    find_task_mut(tasks, task_id).ok_or(TaskError::NotFound(task_id))
}

fn subtask_mut(task: &mut Task, subtask_id: u64) -> Result<&mut Subtask, TaskError> {
    task.subtasks
        .iter_mut()
        .find(|s| s.id == subtask_id)
        .ok_or(TaskError::SubtaskNotFound(subtask_id))
}

fn validated_text(text: &str) -> Result<String, TaskError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::EmptyText);
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Add a new task at the top of the list (newest-first).
/// Returns the assigned id. Blank text is rejected.
pub fn add_task(tasks: &mut Vec<Task>, ids: &mut IdGen, text: &str) -> Result<u64, TaskError> {
    let text = validated_text(text)?;
    let id = ids.next_id();
    tasks.insert(0, Task::new(id, text));
    Ok(id)
}

/// Append a new subtask to an existing task. Returns the assigned id.
///
/// The parent's completion flag is re-derived afterwards: a completed task
/// gaining an (incomplete) subtask becomes incomplete, keeping the
/// all-subtasks-complete derivation intact.
pub fn add_subtask(
    tasks: &mut [Task],
    ids: &mut IdGen,
    task_id: u64,
    text: &str,
) -> Result<u64, TaskError> {
    let text = validated_text(text)?;
    let task = task_mut(tasks, task_id)?;
    let id = ids.next_id();
    task.subtasks.push(Subtask::new(id, text));
    task.completed = task.all_subtasks_completed();
    Ok(id)
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

/// Replace a task's text. Completion and subtasks are untouched.
pub fn edit_task_text(tasks: &mut [Task], task_id: u64, new_text: &str) -> Result<(), TaskError> {
    let text = validated_text(new_text)?;
    let task = task_mut(tasks, task_id)?;
    task.text = text;
    Ok(())
}

/// Replace one subtask's text. Never touches completion state.
pub fn edit_subtask_text(
    tasks: &mut [Task],
    task_id: u64,
    subtask_id: u64,
    new_text: &str,
) -> Result<(), TaskError> {
    let text = validated_text(new_text)?;
    let task = task_mut(tasks, task_id)?;
    let subtask = subtask_mut(task, subtask_id)?;
    subtask.text = text;
    Ok(())
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

/// Flip a task's completion. If the task has subtasks, the new value
/// cascades down to every subtask. Returns the new value so the caller can
/// fire a celebration when it is `true`.
pub fn toggle_task(tasks: &mut [Task], task_id: u64) -> Result<bool, TaskError> {
    let task = task_mut(tasks, task_id)?;
    let new_value = !task.completed;
    task.completed = new_value;
    for subtask in &mut task.subtasks {
        subtask.completed = new_value;
    }
    Ok(new_value)
}

/// Flip one subtask's completion, then re-derive the parent's flag as
/// "all subtasks completed". Returns the subtask's new value.
pub fn toggle_subtask(tasks: &mut [Task], task_id: u64, subtask_id: u64) -> Result<bool, TaskError> {
    let task = task_mut(tasks, task_id)?;
    let subtask = subtask_mut(task, subtask_id)?;
    let new_value = !subtask.completed;
    subtask.completed = new_value;
    task.completed = task.all_subtasks_completed();
    Ok(new_value)
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

/// Remove a task and all of its subtasks.
pub fn delete_task(tasks: &mut Vec<Task>, task_id: u64) -> Result<(), TaskError> {
    let idx = tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or(TaskError::NotFound(task_id))?;
    tasks.remove(idx);
    Ok(())
}

/// Remove one subtask. The parent's completion flag is deliberately NOT
/// re-derived — deleting the last incomplete subtask does not complete the
/// parent. Fixed contract.
pub fn delete_subtask(tasks: &mut [Task], task_id: u64, subtask_id: u64) -> Result<(), TaskError> {
    let task = task_mut(tasks, task_id)?;
    let idx = task
        .subtasks
        .iter()
        .position(|s| s.id == subtask_id)
        .ok_or(TaskError::SubtaskNotFound(subtask_id))?;
    task.subtasks.remove(idx);
    Ok(())
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

/// Move the task at `from` to position `to`, shifting the entries between.
/// Both indices must be valid positions in the current list.
pub fn reorder_tasks(tasks: &mut Vec<Task>, from: usize, to: usize) -> Result<(), TaskError> {
    reorder(tasks, from, to)
}

/// Same as `reorder_tasks`, scoped to one task's subtask list.
pub fn reorder_subtasks(
    tasks: &mut [Task],
    task_id: u64,
    from: usize,
    to: usize,
) -> Result<(), TaskError> {
    let task = task_mut(tasks, task_id)?;
    reorder(&mut task.subtasks, from, to)
}

fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), TaskError> {
    if from >= items.len() {
        return Err(TaskError::InvalidPosition(from));
    }
    if to >= items.len() {
        return Err(TaskError::InvalidPosition(to));
    }
    if from == to {
        return Ok(());
    }
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}
