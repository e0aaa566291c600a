//! Application constants and configuration

pub const APP_NAME: &str = "Nice Todo Demos";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "nice-todo-demos.log";

/// Directory holding the named icon images, relative to the working directory
pub const IMAGES_DIR: &str = "images";

/// Rendered icon width in points; height follows the image aspect ratio
pub const ICON_WIDTH: f32 = 16.0;

/// Seed list shown by the todo demo at startup
pub const DEFAULT_TASKS: &[&str] = &["Feed the plants", "Water the dishes", "Clean the cat"];
