// src/gui/actions/lookup.rs
use std::thread;

use eframe::egui;

use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    lookup::{self, LookupPhase, LookupRequest, LookupResult},
};

/// Validate the form and start a lookup worker. Validation failures only
/// touch the status line; no calls are issued and the phase stays put.
pub fn lookup(app: &mut App, ctx: &egui::Context) {
    if app.state.options.api_key.trim().is_empty() {
        app.status("Please enter an API key");
        logd!("Lookup: Submit with empty API key, ignored");
        return;
    }

    let Some((game_name, tag_line)) = lookup::parse_riot_id(&app.state.gui.riot_id_text)
    else {
        app.status("Invalid Riot ID format. Use: PlayerName#Tag");
        logd!("Lookup: Submit with malformed Riot ID, ignored");
        return;
    };

    let req = LookupRequest {
        game_name: s!(game_name),
        tag_line: s!(tag_line),
        options: app.state.options.clone(),
    };

    // Re-submission is allowed at any time; the sequence number makes sure
    // only the newest submission may publish a result.
    app.seq += 1;
    let seq = app.seq;
    app.phase = LookupPhase::Loading;
    app.running = true;

    logf!(
        "Lookup: Begin #{} {}#{} region={}",
        seq,
        req.game_name,
        req.tag_line,
        req.options.region.code()
    );

    let status = app.status.clone();
    let inbox = app.inbox.clone();
    let ctx2 = ctx.clone();

    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let outcome = lookup::run(&req, Some(&mut prog));
        *inbox.lock().unwrap() = Some(LookupResult { seq, outcome });
        ctx2.request_repaint();
    });
}
