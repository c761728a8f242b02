// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui::{self, widgets::Spinner};

use crate::{
    config::state::AppState,
    lookup::{LookupPhase, LookupResult, PlayerReport},
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Rift Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::from_env())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // lookup lifecycle
    pub phase: LookupPhase,
    pub report: Option<PlayerReport>,
    pub last_error: Option<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // submission counter; workers tag results with it so a stale sequence
    // can never overwrite a newer one
    pub seq: u64,
    pub inbox: Arc<Mutex<Option<LookupResult>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let status = if state.options.api_key.is_empty() {
            s!("Idle — enter an API key")
        } else {
            s!("Idle")
        };

        logf!("Init: region={}", state.options.region.code());

        Self {
            state,
            phase: LookupPhase::Idle,
            report: None,
            last_error: None,
            status: Arc::new(Mutex::new(status)),
            running: false,
            seq: 0,
            inbox: Arc::new(Mutex::new(None)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Drain the worker inbox. Results tagged with an old sequence number
    /// belong to a superseded submission and are dropped.
    pub fn poll_lookup(&mut self) {
        let Some(res) = self.inbox.lock().unwrap().take() else {
            return;
        };

        if res.seq != self.seq {
            logd!("Lookup: Dropped stale result (seq {} vs {})", res.seq, self.seq);
            return;
        }

        self.running = false;
        match res.outcome {
            Ok(report) => {
                logf!(
                    "Lookup: OK {} level={} ranked_entries={}",
                    report.account.riot_id(),
                    report.summoner.summoner_level,
                    report.ranked.len()
                );
                self.report = Some(report);
                self.last_error = None;
                self.phase = LookupPhase::Success;
                self.status("Lookup complete");
            }
            Err(e) => {
                loge!("Lookup: Error: {e}");
                self.last_error = Some(e.to_string());
                self.phase = LookupPhase::Failed;
                self.status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_lookup();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.running {
                    ui.add(Spinner::new().size(14.0));
                }
                let status = self.status.lock().unwrap().clone();
                ui.label(format!("Status: {status}"));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Rift Scout");
            ui.separator();

            components::key_panel::draw(ui, self);
            ui.separator();

            let submit = components::search_panel::draw(ui, self);
            ui.separator();

            components::results_panel::draw(ui, self);

            if submit {
                actions::lookup(self, ctx);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn loaded_app() -> App {
        let mut app = App::new(AppState::default());
        app.seq = 2;
        app.phase = LookupPhase::Loading;
        app.running = true;
        app
    }

    fn ok_report() -> PlayerReport {
        PlayerReport {
            account: serde_json::from_str(r#"{"puuid":"p","gameName":"A","tagLine":"B"}"#)
                .unwrap(),
            summoner: serde_json::from_str(r#"{"puuid":"p","summonerLevel":77}"#).unwrap(),
            ranked: Vec::new(),
        }
    }

    #[test]
    fn current_result_reaches_success() {
        let mut app = loaded_app();
        *app.inbox.lock().unwrap() = Some(LookupResult { seq: 2, outcome: Ok(ok_report()) });

        app.poll_lookup();

        assert_eq!(app.phase, LookupPhase::Success);
        assert!(!app.running);
        assert_eq!(app.report.as_ref().unwrap().summoner.summoner_level, 77);
    }

    #[test]
    fn error_result_reaches_failed_with_message() {
        let mut app = loaded_app();
        *app.inbox.lock().unwrap() =
            Some(LookupResult { seq: 2, outcome: Err(ApiError::NotFound) });

        app.poll_lookup();

        assert_eq!(app.phase, LookupPhase::Failed);
        assert!(app.last_error.as_ref().unwrap().contains("not found"));
        assert!(app.status.lock().unwrap().contains("not found"));
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut app = loaded_app();
        // result from submission 1 arrives after submission 2 started
        *app.inbox.lock().unwrap() =
            Some(LookupResult { seq: 1, outcome: Err(ApiError::NotFound) });

        app.poll_lookup();

        assert_eq!(app.phase, LookupPhase::Loading);
        assert!(app.running);
        assert!(app.report.is_none());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn empty_inbox_is_a_no_op() {
        let mut app = loaded_app();
        app.poll_lookup();
        assert_eq!(app.phase, LookupPhase::Loading);
        assert!(app.running);
    }
}
