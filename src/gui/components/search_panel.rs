// src/gui/components/search_panel.rs
//
// Riot ID field, region selector and the action buttons. Returns true when
// the user asked for a lookup (button or Enter in the ID field); the caller
// runs the action after the frame's widgets are drawn.

use eframe::egui::{self, RichText};

use crate::{
    config::options::Region,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.label("Riot ID:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.riot_id_text)
                .hint_text("Name#TAG")
                .desired_width(220.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.label("Region:");
        let region = &mut app.state.options.region;
        let before = *region;
        egui::ComboBox::from_id_salt("region_combo")
            .selected_text(region.code())
            .show_ui(ui, |ui| {
                for r in Region::ALL {
                    ui.selectable_value(region, *r, format!("{} — {}", r.code(), r.label()));
                }
            });
        if *region != before {
            logf!("UI: Region → {}", region.code());
        }
    });

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(egui::Button::new(RichText::new("LOOK UP").color(black).strong()).fill(red))
            .clicked()
        {
            submit = true;
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
    });

    submit
}
