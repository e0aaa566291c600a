//! App module - hosts the demos and owns window-level state

pub mod icons;
pub mod push_button;
pub mod todo;

use crate::settings::Settings;
use crate::tasks::default_tasks;
use crate::theme;
use crate::types::Demo;
use eframe::egui;
use icons::IconCache;
use push_button::PushButton;
use std::path::PathBuf;
use todo::TodoApplication;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) active_demo: Demo,
    pub(crate) todo: TodoApplication,
    pub(crate) lock_button: PushButton,
    pub(crate) icons: IconCache,
    pub(crate) images_dir: Option<String>,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        theme::install_fonts(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        Self::from_settings(settings, data_dir)
    }

    pub(crate) fn from_settings(settings: Settings, data_dir: PathBuf) -> Self {
        let images_dir = settings.images_dir_or_default();
        info!(images_dir = %images_dir.display(), "Demos ready");

        Self {
            active_demo: Demo::default(),
            todo: TodoApplication::new(default_tasks()),
            lock_button: PushButton::lock(),
            icons: IconCache::new(images_dir),
            images_dir: settings.images_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            images_dir: self.images_dir.clone(),
        }
    }

    pub fn save_settings(&self) {
        self.settings().save(&self.data_dir);
    }

    pub(crate) fn select_demo(&mut self, demo: Demo) {
        if self.active_demo != demo {
            debug!(from = ?self.active_demo, to = ?demo, "Switching demo");
            self.active_demo = demo;
        }
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            let [left, right] = Demo::ALL;
            let mut left_active = self.active_demo == left;
            if theme::segmented_toggle(ui, left.title(), right.title(), &mut left_active) {
                self.select_demo(if left_active { left } else { right });
            }
        });
    }

    /// Renders one frame of the window contents
    pub(crate) fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("demo_tabs")
            .exact_height(theme::TAB_BAR_HEIGHT)
            .show_separator_line(false)
            .frame(theme::tab_bar_frame())
            .show(ctx, |ui| self.render_tab_bar(ui));

        egui::CentralPanel::default()
            .frame(theme::content_frame())
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(self.active_demo.title())
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(theme::SPACING_MD);
                match self.active_demo {
                    Demo::Todo => self.todo.show(ui, &mut self.icons),
                    Demo::LockButton => {
                        self.lock_button.show(ui, &mut self.icons);
                    }
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down, saving settings");
        debug!(
            tasks_done = self.todo.todos().iter().filter(|t| t.done).count(),
            hide_done = self.todo.hide_done(),
            lock_pressed = self.lock_button.pressed(),
            "Discarding demo state"
        );
        self.save_settings();
    }
}
