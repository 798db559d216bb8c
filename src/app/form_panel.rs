//! Appliance input form (left sidebar)

use super::App;
use crate::theme;
use crate::ui::components::{field_label, framed_input};
use eframe::egui;
use tracing::{debug, info};

impl App {
    pub(crate) fn render_form_panel(&mut self, ui: &mut egui::Ui) {
        let s = self.strings();

        ui.add_space(theme::SPACING_XL);
        ui.add(
            egui::Label::new(
                egui::RichText::new(s.form_heading)
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        let mut edited = false;
        let mut hours_edited = false;

        theme::section_frame().show(ui, |ui| {
            let form = &mut self.session.form;

            field_label(ui, s.name);
            edited |= framed_input(ui, &mut form.name, s.name_hint).changed();
            ui.add_space(theme::SPACING_MD);

            field_label(ui, s.usage_hours);
            hours_edited = framed_input(ui, &mut form.usage_hours, s.usage_hours_hint).changed();
            if form.hours_capped {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(s.hours_error)
                            .size(theme::FONT_SMALL)
                            .color(theme::STATUS_ERROR),
                    )
                    .selectable(false),
                );
            }
            ui.add_space(theme::SPACING_MD);

            field_label(ui, s.power);
            edited |= framed_input(ui, &mut form.power, s.power_hint).changed();
            ui.add_space(theme::SPACING_MD);

            field_label(ui, s.price_per_kwh);
            edited |= framed_input(ui, &mut form.price_per_kwh, s.price_per_kwh_hint).changed();
        });

        if hours_edited {
            self.session.hours_edited();
        } else if edited {
            self.session.form_edited();
        }

        ui.add_space(theme::SPACING_LG);

        let full_width = ui.available_width();
        let button_size = egui::vec2(full_width, theme::BUTTON_HEIGHT);

        if ui.add_sized(button_size, theme::button_accent(s.calculate)).clicked() {
            debug!("Calculate pressed");
            self.session.calculate();
        }
        if ui.add_sized(button_size, theme::button(s.add_appliance)).clicked() {
            if let Ok(id) = self.session.add_appliance() {
                info!(%id, count = self.session.ledger.len(), "Appliance added from form");
            }
        }
        if ui.add_sized(button_size, theme::button_danger(s.reset)).clicked() {
            self.session.reset_all();
        }
    }
}
