//! Reusable UI components

use crate::theme;
use eframe::egui;

/// Custom checkbox widget with consistent styling
pub fn styled_checkbox(ui: &mut egui::Ui, selected: bool, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let rounding = 3.0;

        if selected {
            painter.rect_filled(rect, rounding, theme::ACCENT);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::CHECK,
                egui::FontId::proportional(size * 0.7),
                theme::ACCENT_DARK_TEXT,
            );
        } else {
            let stroke_color = if response.hovered() {
                theme::ACCENT
            } else {
                theme::BORDER_DEFAULT
            };
            painter.rect_stroke(
                rect,
                rounding,
                egui::Stroke::new(theme::STROKE_MEDIUM, stroke_color),
                egui::StrokeKind::Inside,
            );
        }
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}

/// Small icon-only button that turns red on hover
pub fn delete_button(ui: &mut egui::Ui, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let color = if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            theme::STATUS_ERROR
        } else {
            theme::TEXT_DIM
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            egui_phosphor::regular::X,
            egui::FontId::proportional(size * 0.85),
            color,
        );
    }

    response
}

/// Field caption above a text input
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
}

/// Single-line text input inside a bordered frame.
/// Returns the inner `TextEdit` response so callers can check `changed()`.
pub fn framed_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    theme::section_frame()
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .frame(false)
                    .font(egui::FontId::proportional(theme::FONT_BODY))
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}
