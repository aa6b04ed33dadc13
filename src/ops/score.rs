use crate::model::task::Task;

/// Overall completion percentage, 0–100.
///
/// Each task contributes a fraction: 0/1 of its own flag when it has no
/// subtasks, otherwise the ratio of completed subtasks. Partial credit flows
/// from subtasks even though the parent flag itself is all-or-nothing.
/// Recomputed from current state on every render, never stored.
pub fn productivity_score(tasks: &[Task]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let sum: f64 = tasks.iter().map(task_contribution).sum();
    (100.0 * sum / tasks.len() as f64).round() as u8
}

fn task_contribution(task: &Task) -> f64 {
    if task.subtasks.is_empty() {
        if task.completed { 1.0 } else { 0.0 }
    } else {
        let done = task.subtasks.iter().filter(|s| s.completed).count();
        done as f64 / task.subtasks.len() as f64
    }
}

/// Number of tasks not yet completed (header's "N tasks remaining")
pub fn remaining_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Subtask;
    use pretty_assertions::assert_eq;

    fn task(id: u64, completed: bool, subtasks: Vec<Subtask>) -> Task {
        Task {
            id,
            text: format!("task {id}"),
            completed,
            subtasks,
        }
    }

    fn sub(id: u64, completed: bool) -> Subtask {
        Subtask {
            id,
            text: format!("sub {id}"),
            completed,
        }
    }

    #[test]
    fn empty_list_scores_zero() {
        assert_eq!(productivity_score(&[]), 0);
    }

    #[test]
    fn single_completed_task_scores_100() {
        let tasks = vec![task(1, true, vec![])];
        assert_eq!(productivity_score(&tasks), 100);
    }

    #[test]
    fn half_completed_subtasks_score_50() {
        let tasks = vec![task(1, false, vec![sub(2, true), sub(3, false)])];
        assert_eq!(productivity_score(&tasks), 50);
    }

    #[test]
    fn mixed_shapes_average_per_task() {
        // 1.0 + 1/4 over two tasks → round(62.5) = 63
        let tasks = vec![
            task(1, true, vec![]),
            task(
                2,
                false,
                vec![sub(3, true), sub(4, false), sub(5, false), sub(6, false)],
            ),
        ];
        assert_eq!(productivity_score(&tasks), 63);
    }

    #[test]
    fn subtask_ratio_ignores_parent_flag() {
        // Parent flag says incomplete but both subtasks are done — the
        // contribution comes from the ratio, not the flag.
        let tasks = vec![task(1, false, vec![sub(2, true), sub(3, true)])];
        assert_eq!(productivity_score(&tasks), 100);
    }

    #[test]
    fn remaining_counts_incomplete_tasks() {
        let tasks = vec![
            task(1, true, vec![]),
            task(2, false, vec![]),
            task(3, false, vec![sub(4, true)]),
        ];
        assert_eq!(remaining_count(&tasks), 2);
    }
}
