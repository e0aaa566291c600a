//! Task list updates and view derivation
//!
//! Both functions are pure: they take the current list by reference and
//! never modify it, so the caller swaps in a whole new list on change.

use crate::constants::DEFAULT_TASKS;
use crate::types::Task;
use std::borrow::Cow;

/// Returns a copy of `list` with the task whose stored `index` equals
/// `index` marked as done. Unknown indices yield an unchanged copy.
pub fn mark_done(list: &[Task], index: usize) -> Vec<Task> {
    list.iter()
        .map(|t| {
            if t.index == index {
                Task { done: true, ..t.clone() }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Tasks to display. Borrows the full list unless done tasks are hidden.
pub fn visible_tasks(list: &[Task], hide_done: bool) -> Cow<'_, [Task]> {
    if hide_done {
        Cow::Owned(list.iter().filter(|t| !t.done).cloned().collect())
    } else {
        Cow::Borrowed(list)
    }
}

pub fn default_tasks() -> Vec<Task> {
    DEFAULT_TASKS
        .iter()
        .enumerate()
        .map(|(i, label)| Task::new(*label, i))
        .collect()
}

/// Index values that appear more than once, in first-seen order
pub fn duplicate_indices(list: &[Task]) -> Vec<usize> {
    let mut seen = std::collections::HashSet::new();
    let mut dups = Vec::new();
    for t in list {
        if !seen.insert(t.index) && !dups.contains(&t.index) {
            dups.push(t.index);
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn task(label: &str, done: bool, index: usize) -> Task {
        Task { task: label.to_string(), done, index }
    }

    fn two_tasks() -> Vec<Task> {
        vec![task("A", false, 0), task("B", false, 1)]
    }

    #[test]
    fn mark_done_sets_matching_task() {
        let list = two_tasks();
        let next = mark_done(&list, 1);
        assert_eq!(next, vec![task("A", false, 0), task("B", true, 1)]);
        // input untouched
        assert_eq!(list, two_tasks());
    }

    #[test]
    fn mark_done_matches_stored_index_not_position() {
        let list = vec![task("C", false, 7), task("A", false, 0), task("B", false, 3)];
        let next = mark_done(&list, 0);
        assert_eq!(next[1], task("A", true, 0));
        assert!(!next[0].done);
        assert!(!next[2].done);
    }

    #[test]
    fn mark_done_unknown_index_is_noop() {
        let list = two_tasks();
        assert_eq!(mark_done(&list, 42), list);
    }

    #[test]
    fn mark_done_on_done_task_keeps_it_done() {
        let list = vec![task("A", true, 0)];
        assert_eq!(mark_done(&list, 0), list);
    }

    #[test]
    fn hide_done_filters_completed() {
        let list = mark_done(&two_tasks(), 1);
        assert_eq!(visible_tasks(&list, true).into_owned(), vec![task("A", false, 0)]);
    }

    #[test]
    fn show_all_borrows_original() {
        let list = two_tasks();
        let view = visible_tasks(&list, false);
        assert!(matches!(view, Cow::Borrowed(_)));
        assert_eq!(view.as_ptr(), list.as_ptr());
    }

    #[test]
    fn default_tasks_are_pending_and_indexed() {
        let tasks = default_tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0], task("Feed the plants", false, 0));
        assert_eq!(tasks[1], task("Water the dishes", false, 1));
        assert_eq!(tasks[2], task("Clean the cat", false, 2));
    }

    #[test]
    fn duplicate_indices_reported_once() {
        let list = vec![task("A", false, 1), task("B", false, 1), task("C", false, 1), task("D", false, 2)];
        assert_eq!(duplicate_indices(&list), vec![1]);
        assert!(duplicate_indices(&default_tasks()).is_empty());
    }

    fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec(("[a-z]{0,6}", any::<bool>(), 0usize..16), 0..12).prop_map(|v| {
            v.into_iter()
                .map(|(label, done, index)| Task { task: label, done, index })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn mark_done_only_touches_target(list in arb_tasks(), target in 0usize..20) {
            let next = mark_done(&list, target);
            prop_assert_eq!(next.len(), list.len());
            for (before, after) in list.iter().zip(&next) {
                prop_assert_eq!(&before.task, &after.task);
                prop_assert_eq!(before.index, after.index);
                if before.index == target {
                    prop_assert!(after.done);
                } else {
                    prop_assert_eq!(before.done, after.done);
                }
            }
        }

        #[test]
        fn mark_done_is_idempotent(list in arb_tasks(), target in 0usize..20) {
            let once = mark_done(&list, target);
            prop_assert_eq!(mark_done(&once, target), once);
        }

        #[test]
        fn hide_done_keeps_pending_in_order(list in arb_tasks()) {
            let expected: Vec<Task> = list.iter().filter(|t| !t.done).cloned().collect();
            prop_assert_eq!(visible_tasks(&list, true).into_owned(), expected);
            prop_assert_eq!(visible_tasks(&list, false).into_owned(), list);
        }
    }
}
