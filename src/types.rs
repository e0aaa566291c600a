//! Common types and data structures

/// A single todo entry. `index` is assigned once when the list is built and
/// identifies the task for its whole lifetime, independent of where it sits
/// in any filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub task: String,
    pub done: bool,
    pub index: usize,
}

impl Task {
    pub fn new(task: impl Into<String>, index: usize) -> Self {
        Self { task: task.into(), done: false, index }
    }
}

/// Demo shown in the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    Todo,
    LockButton,
}

impl Demo {
    pub const ALL: [Demo; 2] = [Demo::Todo, Demo::LockButton];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Todo => "Todo",
            Demo::LockButton => "Lock button",
        }
    }
}

/// Icons drawn by the demos. Image-backed kinds are loaded from the images
/// directory; every kind has a glyph fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Lock,
    Unlock,
    Done,
    Pending,
}

impl IconKind {
    /// Image file name under the images directory, if this icon is image-backed
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            IconKind::Lock => Some("lock.png"),
            IconKind::Unlock => Some("unlock.png"),
            IconKind::Done | IconKind::Pending => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Lock => egui_phosphor::regular::LOCK,
            IconKind::Unlock => egui_phosphor::regular::LOCK_OPEN,
            IconKind::Done => egui_phosphor::regular::CHECK,
            IconKind::Pending => egui_phosphor::regular::CIRCLE,
        }
    }
}
