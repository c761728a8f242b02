// src/gui/components/results_panel.rs
//
// Renders the current lookup outcome. Purely a view; reads App only.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, lookup::LookupPhase};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    match app.phase {
        LookupPhase::Idle => {
            ui.label("Enter a Riot ID and press LOOK UP.");
            return;
        }
        LookupPhase::Loading => {
            ui.label("Looking up…");
            return;
        }
        LookupPhase::Failed => {
            let msg = app.last_error.as_deref().unwrap_or("lookup failed");
            ui.label(
                RichText::new(format!("Error: {msg}"))
                    .color(egui::Color32::from_rgb(220, 30, 30)),
            );
            return;
        }
        LookupPhase::Success => {}
    }

    let Some(report) = app.report.as_ref() else {
        return;
    };

    ui.heading("Account");
    egui::Grid::new("account_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Game Name:");
            ui.label(&report.account.game_name);
            ui.end_row();

            ui.label("Tag:");
            ui.label(&report.account.tag_line);
            ui.end_row();

            ui.label("PUUID:");
            // full value on hover; the Copy action carries it whole
            ui.label(RichText::new(short_puuid(&report.account.puuid)).monospace())
                .on_hover_text(&report.account.puuid);
            ui.end_row();

            ui.label("Summoner Level:");
            ui.label(report.summoner.summoner_level.to_string());
            ui.end_row();
        });

    ui.separator();
    ui.heading("Ranked");

    if report.ranked.is_empty() {
        ui.label("No ranked data available");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for h in ["Queue", "Tier", "LP", "Record"] {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|mut body| {
            body.rows(18.0, report.ranked.len(), |mut row| {
                let entry = &report.ranked[row.index()];
                row.col(|ui| {
                    ui.label(entry.queue_label());
                });
                row.col(|ui| {
                    ui.label(join!(&entry.tier, " ", &entry.rank));
                });
                row.col(|ui| {
                    ui.label(entry.league_points.to_string());
                });
                row.col(|ui| {
                    ui.label(format!(
                        "{}W {}L ({:.1}% WR)",
                        entry.wins,
                        entry.losses,
                        entry.win_rate()
                    ));
                });
            });
        });
}

fn short_puuid(puuid: &str) -> String {
    const SHOWN: usize = 20;
    if puuid.chars().count() <= SHOWN {
        s!(puuid)
    } else {
        let mut out: String = puuid.chars().take(SHOWN).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::short_puuid;

    #[test]
    fn short_puuid_truncates_long_values() {
        let long = "a".repeat(78);
        let shown = short_puuid(&long);
        assert_eq!(shown.chars().count(), 21);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn short_puuid_keeps_short_values() {
        assert_eq!(short_puuid("abc"), "abc");
    }
}
