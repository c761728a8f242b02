// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::app::App;

pub fn copy(app: &App, ui_ctx: &egui::Context) {
    let Some(report) = app.report.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no report yet");
        return;
    };

    let txt = report.to_text(app.state.options.region);
    logf!("Copy: {} ({} ranked entries)", report.account.riot_id(), report.ranked.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
