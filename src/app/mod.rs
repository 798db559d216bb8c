//! App module - window state and the glue between egui and the session

mod form_panel;
mod table_view;

use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use tracing::debug;
use watt_ledger::i18n::{Language, Strings};
use watt_ledger::settings::Settings;
use watt_ledger::{LedgerAction, Session};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) session: Session,
    pub(crate) language: Language,
    /// Header control events collected while drawing the table,
    /// applied once the frame's UI pass is done
    pub(crate) pending_actions: Vec<LedgerAction>,
    pub(crate) col_w_value: f32,
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
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            session: Session::new(),
            language: settings.language,
            pending_actions: Vec::new(),
            col_w_value: settings.col_w_value,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            language: self.language,
            col_w_value: self.col_w_value,
        };
        settings.save(&self.data_dir);
    }

    /// Apply toggle/delete events queued by the table
    pub(crate) fn apply_pending_actions(&mut self) {
        for action in self.pending_actions.drain(..) {
            debug!(?action, "Applying table action");
            self.session.apply(action);
        }
    }

    pub(crate) fn render_header_bar(&mut self, ui: &mut egui::Ui) {
        let s = self.strings();
        ui.horizontal_centered(|ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(egui_phosphor::regular::LIGHTNING)
                        .size(theme::FONT_TITLE)
                        .color(theme::ACCENT),
                )
                .selectable(false),
            );
            ui.add(
                egui::Label::new(
                    egui::RichText::new(s.title)
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut russian = self.language == Language::Russian;
                if theme::segmented_toggle(
                    ui,
                    Language::Russian.code(),
                    Language::English.code(),
                    &mut russian,
                ) {
                    self.language = if russian {
                        Language::Russian
                    } else {
                        Language::English
                    };
                    debug!(language = ?self.language, "Language switched");
                }
            });
        });
    }
}
