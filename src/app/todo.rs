//! Todo demo: an ordered task list with a "hide done" filter

use super::icons::IconCache;
use crate::tasks::{duplicate_indices, mark_done, visible_tasks};
use crate::theme;
use crate::types::Task;
use crate::ui::components::{filter_button, task_row};
use eframe::egui;
use std::borrow::Cow;
use tracing::{debug, warn};

/// User intent observed while rendering the todo view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoAction {
    MarkDone { index: usize },
    SetHideDone(bool),
}

pub struct TodoApplication {
    todos: Vec<Task>,
    hide_done: bool,
}

impl TodoApplication {
    pub fn new(initial_list: Vec<Task>) -> Self {
        let dups = duplicate_indices(&initial_list);
        if !dups.is_empty() {
            warn!(?dups, "Task list contains duplicate indices");
        }
        debug!(count = initial_list.len(), "Todo list created");
        Self { todos: initial_list, hide_done: false }
    }

    pub fn todos(&self) -> &[Task] {
        &self.todos
    }

    pub fn hide_done(&self) -> bool {
        self.hide_done
    }

    /// Tasks currently shown, derived fresh from state
    pub fn display_list(&self) -> Cow<'_, [Task]> {
        visible_tasks(&self.todos, self.hide_done)
    }

    pub fn update(&mut self, action: TodoAction) {
        debug!(?action, "Todo action");
        match action {
            TodoAction::MarkDone { index } => self.todos = mark_done(&self.todos, index),
            TodoAction::SetHideDone(flag) => self.hide_done = flag,
        }
    }

    /// Draws the filter switch and the visible rows. Returns the action the
    /// user triggered this frame, if any; state is left untouched.
    pub fn view(&self, ui: &mut egui::Ui, icons: &mut IconCache) -> Option<TodoAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for (flag, label) in [(false, "Show all"), (true, "Hide done")] {
                if filter_button(ui, self.hide_done, flag, label).clicked() {
                    action = Some(TodoAction::SetHideDone(flag));
                }
            }
        });
        ui.add_space(theme::SPACING_MD);

        let visible = self.display_list();
        for task in visible.iter() {
            let index = task.index;
            ui.push_id(index, |ui| {
                if task_row(ui, task, icons) {
                    action = Some(TodoAction::MarkDone { index });
                }
            });
        }

        action
    }

    pub fn show(&mut self, ui: &mut egui::Ui, icons: &mut IconCache) {
        if let Some(action) = self.view(ui, icons) {
            self.update(action);
        }
    }
}
