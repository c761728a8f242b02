// src/lookup.rs
//
// The sequential lookup: account → summoner → ranked, one GET each.
// The GUI runs this on a worker thread; tests run it against a mock server.

use crate::{
    api::{
        ApiClient,
        models::{AccountDto, LeagueEntryDto, SummonerDto},
    },
    config::options::{LookupOptions, Region},
    error::ApiError,
    progress::Progress,
};

/// One submitted form: who to look up, where, with what key.
#[derive(Clone, Debug)]
pub struct LookupRequest {
    pub game_name: String,
    pub tag_line: String,
    pub options: LookupOptions,
}

/// Everything a completed lookup displays.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerReport {
    pub account: AccountDto,
    pub summoner: SummonerDto,
    pub ranked: Vec<LeagueEntryDto>,
}

/// Display form phases. Terminal states accept a new submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Worker → UI message, tagged with the submission it answers.
/// Results for a superseded submission are dropped on arrival.
pub struct LookupResult {
    pub seq: u64,
    pub outcome: Result<PlayerReport, ApiError>,
}

/// Split "Name#TAG" into its halves. Both must be non-empty.
pub fn parse_riot_id(riot_id: &str) -> Option<(&str, &str)> {
    let (game_name, tag_line) = riot_id.trim().split_once('#')?;
    let (game_name, tag_line) = (game_name.trim(), tag_line.trim());
    if game_name.is_empty() || tag_line.is_empty() {
        return None;
    }
    Some((game_name, tag_line))
}

/// Top-level runner: build a client from the request and walk the sequence.
pub fn run(
    req: &LookupRequest,
    progress: Option<&mut dyn Progress>,
) -> Result<PlayerReport, ApiError> {
    let client = ApiClient::new(&req.options);
    run_with_client(&client, &req.game_name, &req.tag_line, progress)
}

/// The sequence itself, on any client (tests inject a mock-server one).
pub fn run_with_client(
    client: &ApiClient,
    game_name: &str,
    tag_line: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PlayerReport, ApiError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log("Fetching account…");
    }

    let account = client.get_account(game_name, tag_line)?;
    logf!("Lookup: Account OK {}#{}", account.game_name, account.tag_line);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("account");
        p.log("Fetching summoner…");
    }

    // The puuid from the account response is the join key; pass it through
    // unchanged.
    let summoner = client.get_summoner(&account.puuid)?;
    logf!("Lookup: Summoner OK level={}", summoner.summoner_level);
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("summoner");
        p.log("Fetching ranked entries…");
    }

    // Newer summoner-v4 revisions omit `id`; the puuid doubles as the
    // league key then.
    let league_key = if summoner.id.is_empty() {
        summoner.puuid.as_str()
    } else {
        summoner.id.as_str()
    };

    // Ranked data is optional: personal keys often lack the permission, and
    // unranked players have no entries. Either way the form shows
    // "no ranked data" rather than failing the lookup.
    let ranked = match client.get_ranked_entries(league_key) {
        Ok(entries) => entries,
        Err(e) => {
            logd!("Lookup: Ranked unavailable ({e}), continuing without");
            Vec::new()
        }
    };
    if let Some(p) = progress.as_deref_mut() {
        p.step_done("ranked");
        p.finish();
    }

    Ok(PlayerReport { account, summoner, ranked })
}

impl PlayerReport {
    /// Plain-text summary for the clipboard; also what the idempotence
    /// tests compare.
    pub fn to_text(&self, region: Region) -> String {
        let mut out = s!();

        out.push_str("=== ACCOUNT ===\n");
        out.push_str(&format!("Riot ID: {}\n", self.account.riot_id()));
        out.push_str(&format!("Region: {}\n", region.code()));
        out.push_str(&format!("PUUID: {}\n", self.account.puuid));

        out.push_str("\n=== SUMMONER ===\n");
        out.push_str(&format!("Summoner Level: {}\n", self.summoner.summoner_level));

        out.push_str("\n=== RANKED ===\n");
        if self.ranked.is_empty() {
            out.push_str("No ranked data available\n");
        } else {
            for entry in &self.ranked {
                out.push_str(&format!("{}: {}\n", entry.queue_label(), entry.summary()));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_riot_id_splits_on_first_hash() {
        assert_eq!(parse_riot_id("Faker#KR1"), Some(("Faker", "KR1")));
        assert_eq!(parse_riot_id("  Faker # KR1 "), Some(("Faker", "KR1")));
        // tags cannot contain '#'; everything after the first one is tag text
        assert_eq!(parse_riot_id("a#b#c"), Some(("a", "b#c")));
    }

    #[test]
    fn parse_riot_id_rejects_malformed_input() {
        assert_eq!(parse_riot_id("Faker"), None);
        assert_eq!(parse_riot_id("#KR1"), None);
        assert_eq!(parse_riot_id("Faker#"), None);
        assert_eq!(parse_riot_id(""), None);
    }

    #[test]
    fn report_text_renders_empty_ranked_as_no_data() {
        let report = PlayerReport {
            account: serde_json::from_str(
                r#"{"puuid":"p","gameName":"A","tagLine":"B"}"#,
            )
            .unwrap(),
            summoner: serde_json::from_str(
                r#"{"puuid":"p","summonerLevel":30}"#,
            )
            .unwrap(),
            ranked: Vec::new(),
        };
        let text = report.to_text(Region::Euw1);
        assert!(text.contains("Riot ID: A#B"));
        assert!(text.contains("No ranked data available"));
    }
}
