//! Results table (central panel)
//!
//! Drawn from the session's `Report` every frame. Header controls only queue
//! `LedgerAction`s; nothing here mutates the ledger directly.

use super::App;
use crate::theme;
use crate::ui::components::{delete_button, styled_checkbox};
use eframe::egui;
use watt_ledger::i18n::Strings;
use watt_ledger::report::{ApplianceColumn, Report};
use watt_ledger::LedgerAction;

impl App {
    pub(crate) fn render_results(&mut self, ui: &mut egui::Ui) {
        let s = self.strings();

        let Some(report) = self.session.report() else {
            ui.centered_and_justified(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(s.empty_table)
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });
            return;
        };

        if !self.session.calculated() {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!(
                        "{}  {}",
                        egui_phosphor::regular::INFO,
                        s.stale_table
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_SM);
        }

        let mut actions = Vec::new();
        egui::ScrollArea::horizontal()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                theme::card_frame().show(ui, |ui| {
                    render_table(ui, &report, s, self.col_w_value, &mut actions);
                    ui.add_space(theme::SPACING_MD);
                    render_total(ui, &report, s, self.col_w_value);
                });
            });
        self.pending_actions.extend(actions);
    }
}

fn render_table(
    ui: &mut egui::Ui,
    report: &Report,
    s: &Strings,
    col_w_value: f32,
    actions: &mut Vec<LedgerAction>,
) {
    use egui_extras::{Column, TableBuilder};

    let mut table = TableBuilder::new(ui)
        .id_salt("results_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(theme::PERIOD_COL_WIDTH));
    for _ in 0..report.total_span() {
        table = table.column(Column::exact(col_w_value).clip(true));
    }

    table
        .header(theme::TABLE_HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                header_text(ui, s.period);
            });
            for column in &report.columns {
                header.col(|ui| {
                    consumption_header(ui, column, s, actions);
                });
                header.col(|ui| {
                    ui.vertical(|ui| {
                        header_text(ui, s.price);
                        caption(ui, &s.appliance_label(&column.name, &column.usage_hours));
                    });
                });
            }
        })
        .body(|mut body| {
            for row in &report.rows {
                body.row(theme::ROW_HEIGHT, |mut table_row| {
                    table_row.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(s.period_label(row.period))
                                    .size(theme::FONT_BODY)
                                    .color(theme::TEXT_SECONDARY),
                            )
                            .selectable(false),
                        );
                    });
                    for (cell, column) in row.cells.iter().zip(&report.columns) {
                        let color = if column.enabled {
                            theme::TEXT_PRIMARY
                        } else {
                            theme::TEXT_DIM
                        };
                        table_row.col(|ui| {
                            value_text(ui, &cell.consumption, color);
                        });
                        table_row.col(|ui| {
                            value_text(ui, &cell.cost, color);
                        });
                    }
                });
            }
        });
}

/// Consumption column header: caption plus the enable toggle and delete control
fn consumption_header(
    ui: &mut egui::Ui,
    column: &ApplianceColumn,
    s: &Strings,
    actions: &mut Vec<LedgerAction>,
) {
    ui.vertical(|ui| {
        header_text(ui, s.consumption);
        ui.horizontal(|ui| {
            let toggle = styled_checkbox(ui, column.enabled, theme::CHECKBOX_SIZE)
                .on_hover_text(s.enabled_tooltip);
            if toggle.clicked() {
                actions.push(LedgerAction::Toggle(column.id, !column.enabled));
            }
            let delete = delete_button(ui, theme::CHECKBOX_SIZE).on_hover_text(s.delete_tooltip);
            if delete.clicked() {
                actions.push(LedgerAction::Remove(column.id));
            }
        });
        caption(ui, &s.appliance_label(&column.name, &column.usage_hours)).on_hover_text(
            format!(
                "{} {}",
                s.added_at,
                column.created_at.format("%Y-%m-%d %H:%M:%S")
            ),
        );
    });
}

/// Aggregate row: label cell plus one merged cell spanning every value column
fn render_total(ui: &mut egui::Ui, report: &Report, s: &Strings, col_w_value: f32) {
    let span_width = col_w_value * report.total_span() as f32;
    ui.horizontal(|ui| {
        ui.add_sized(
            egui::vec2(theme::PERIOD_COL_WIDTH, theme::ROW_HEIGHT),
            egui::Label::new(
                egui::RichText::new(s.total)
                    .size(theme::FONT_BODY)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            )
            .selectable(false),
        );
        theme::section_frame().show(ui, |ui| {
            ui.set_width(span_width);
            ui.vertical_centered(|ui| {
                value_text(
                    ui,
                    &s.total_consumption_line(&report.total.consumption),
                    theme::ACCENT,
                );
                value_text(ui, &s.total_cost_line(&report.total.cost), theme::ACCENT);
            });
        });
    });
}

fn header_text(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_LABEL)
                .strong()
                .color(theme::TEXT_PRIMARY),
        )
        .selectable(false),
    );
}

fn caption(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false)
        .truncate()
        .sense(egui::Sense::hover()),
    )
}

fn value_text(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .monospace()
                .color(color),
        )
        .selectable(false),
    );
}
