//! Reusable UI components
//!
//! This module contains standalone UI components shared by the demos.

use crate::app::icons::IconCache;
use crate::constants::ICON_WIDTH;
use crate::theme;
use crate::types::{IconKind, Task};
use crate::utils::fit_width;
use eframe::egui;

/// Widget id of the filter button that sets "hide done" to `flag`
pub fn filter_id(flag: bool) -> egui::Id {
    egui::Id::new(("hide_done_filter", flag))
}

/// Widget id of the mark-done control for the task with stored `index`
pub fn mark_done_id(index: usize) -> egui::Id {
    egui::Id::new(("mark_done", index))
}

/// One half of the "Show all" / "Hide done" switch.
/// Filled when `current == flag`, outlined otherwise.
pub fn filter_button(ui: &mut egui::Ui, current: bool, flag: bool, label: &str) -> egui::Response {
    let selected = current == flag;
    let (fill, text_color) = if selected {
        (theme::FILTER_ACTIVE, theme::TEXT_PRIMARY)
    } else {
        (theme::BG_BASE, theme::FILTER_ACTIVE)
    };

    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        egui::FontId::proportional(theme::FONT_LABEL),
        text_color,
    );
    let size = egui::vec2(
        galley.size().x + theme::FILTER_PADDING * 2.0,
        theme::BUTTON_HEIGHT,
    );
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let response = ui.interact(rect, filter_id(flag), egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let (fill, draw_rect) = theme::button_visual(&response, fill, rect);
        painter.rect_filled(draw_rect, 0.0, fill);
        painter.rect_stroke(
            draw_rect,
            0.0,
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::FILTER_ACTIVE),
            egui::StrokeKind::Inside,
        );
        painter.galley(draw_rect.center() - galley.size() / 2.0, galley, text_color);
    }

    response
}

/// Draws `kind` at icon size: the cached image when one could be loaded,
/// the glyph in `color` otherwise.
pub fn icon(
    ui: &mut egui::Ui,
    icons: &mut IconCache,
    kind: IconKind,
    color: egui::Color32,
) -> egui::Response {
    match icons.texture(ui.ctx(), kind) {
        Some(texture) => {
            let size = fit_width(texture.size(), ICON_WIDTH);
            ui.image(egui::load::SizedTexture::new(texture.id(), size))
        }
        None => ui.add(
            egui::Label::new(
                egui::RichText::new(kind.glyph())
                    .size(theme::FONT_BODY)
                    .color(color),
            )
            .selectable(false),
        ),
    }
}

/// Task row: state icon followed by the label, with a left border.
///
/// The icon is the mark-done control. Once the task is done it only senses
/// hover, so it never reports a click for a done task.
pub fn task_row(ui: &mut egui::Ui, task: &Task, icons: &mut IconCache) -> bool {
    let color = if task.done { theme::TEXT_DIM } else { theme::TEXT_PRIMARY };
    let kind = if task.done { IconKind::Done } else { IconKind::Pending };

    let row = egui::Frame::new()
        .inner_margin(egui::Margin {
            left: theme::TASK_ROW_MARGIN,
            right: 0,
            top: 2,
            bottom: 2,
        })
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = theme::SPACING_SM;
                let glyph = icon(ui, icons, kind, color);
                let sense = if task.done {
                    egui::Sense::hover()
                } else {
                    egui::Sense::click()
                };
                let mark = ui.interact(glyph.rect, mark_done_id(task.index), sense);
                if mark.hovered() && !task.done {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(&task.task)
                            .size(theme::FONT_BODY)
                            .color(color),
                    )
                    .selectable(false),
                );
                mark.clicked()
            })
            .inner
        });

    let rect = row.response.rect;
    ui.painter().vline(
        rect.left(),
        rect.y_range(),
        egui::Stroke::new(theme::STROKE_THICK, color),
    );

    row.inner
}

/// Button showing an icon followed by a label. Uses the icon image when one
/// could be loaded, the glyph otherwise. `active` lightens the fill.
pub fn icon_button(
    ui: &mut egui::Ui,
    icons: &mut IconCache,
    kind: IconKind,
    label: &str,
    active: bool,
) -> egui::Response {
    let button = match icons.texture(ui.ctx(), kind) {
        Some(texture) => {
            let size = fit_width(texture.size(), ICON_WIDTH);
            egui::Button::image_and_text(
                egui::load::SizedTexture::new(texture.id(), size),
                egui::RichText::new(label).size(theme::FONT_BODY),
            )
        }
        None => egui::Button::new(
            egui::RichText::new(format!("{}  {}", kind.glyph(), label)).size(theme::FONT_BODY),
        ),
    };

    let fill = if active {
        theme::lighten(theme::BTN_DEFAULT, 0.12)
    } else {
        theme::BTN_DEFAULT
    };
    ui.add(button.fill(fill).corner_radius(theme::RADIUS_DEFAULT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{click_at, layout, panel_frame};
    use tempfile::tempdir;

    #[test]
    fn components_report_no_click_without_input() {
        let dir = tempdir().unwrap();
        let mut icons = IconCache::new(dir.path().to_path_buf());
        let ctx = egui::Context::default();
        theme::install_fonts(&ctx);
        let _ = ctx.run(
            egui::RawInput::default(),
            panel_frame(|ui| {
                assert!(!filter_button(ui, false, false, "Show all").clicked());
                assert!(!filter_button(ui, false, true, "Hide done").clicked());
                assert!(!task_row(ui, &Task::new("Feed the plants", 0), &mut icons));
                let done = Task { task: "Clean the cat".into(), done: true, index: 2 };
                assert!(!task_row(ui, &done, &mut icons));
            }),
        );
    }

    #[test]
    fn filter_button_reports_one_click() {
        let ctx = egui::Context::default();
        theme::install_fonts(&ctx);
        let mut rect = egui::Rect::NOTHING;
        let mut clicks = 0;
        let mut frame = panel_frame(|ui| {
            let response = filter_button(ui, false, true, "Hide done");
            rect = response.rect;
            if response.clicked() {
                clicks += 1;
            }
        });
        layout(&ctx, &mut frame);
        let target = ctx.read_response(filter_id(true)).unwrap().rect.center();
        click_at(&ctx, target, &mut frame);
        drop(frame);

        assert!(rect.contains(target));
        assert_eq!(clicks, 1);
    }

    #[test]
    fn done_task_row_ignores_clicks() {
        let dir = tempdir().unwrap();
        let mut icons = IconCache::new(dir.path().to_path_buf());
        let ctx = egui::Context::default();
        theme::install_fonts(&ctx);
        let pending = Task::new("Feed the plants", 3);
        let done = Task { task: "Clean the cat".into(), done: true, index: 4 };
        let mut clicked = Vec::new();
        let mut frame = panel_frame(|ui| {
            for task in [&pending, &done] {
                if task_row(ui, task, &mut icons) {
                    clicked.push(task.index);
                }
            }
        });
        layout(&ctx, &mut frame);
        for index in [3, 4] {
            let target = ctx.read_response(mark_done_id(index)).unwrap().rect.center();
            click_at(&ctx, target, &mut frame);
        }
        drop(frame);

        assert_eq!(clicked, vec![3]);
    }

    #[test]
    fn task_row_icon_goes_through_cache() {
        let dir = tempdir().unwrap();
        let mut icons = IconCache::new(dir.path().to_path_buf());
        let ctx = egui::Context::default();
        let _ = ctx.run(
            egui::RawInput::default(),
            panel_frame(|ui| {
                task_row(ui, &Task::new("Water the dishes", 1), &mut icons);
            }),
        );
        assert!(icons.is_cached(IconKind::Pending));
        assert!(!icons.is_cached(IconKind::Done));
    }

    #[test]
    fn icon_button_falls_back_to_glyph() {
        let dir = tempdir().unwrap();
        let mut icons = IconCache::new(dir.path().to_path_buf());
        let ctx = egui::Context::default();
        theme::install_fonts(&ctx);
        let _ = ctx.run(
            egui::RawInput::default(),
            panel_frame(|ui| {
                assert!(!icon_button(ui, &mut icons, IconKind::Unlock, "lock", false).clicked());
            }),
        );
        assert!(icons.is_cached(IconKind::Unlock));
    }
}
