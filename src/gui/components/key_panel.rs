// src/gui/components/key_panel.rs
//
// API key row. Masked by default; the key itself never goes to the log.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Riot API Key:");

        let masked = !app.state.gui.show_api_key;
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.options.api_key)
                .password(masked)
                .desired_width(320.0)
                .font(egui::TextStyle::Monospace),
        );
        if resp.changed() {
            logd!("UI: API key edited ({} chars)", app.state.options.api_key.len());
        }

        ui.checkbox(&mut app.state.gui.show_api_key, "Show");
    });
}
