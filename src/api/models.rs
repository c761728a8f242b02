// src/api/models.rs
use serde::Deserialize;

// Account V1 response
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

impl AccountDto {
    /// Player-visible identifier, "Name#TAG".
    pub fn riot_id(&self) -> String {
        join!(&self.game_name, "#", &self.tag_line)
    }
}

// Summoner V4 response
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    /// Encrypted summoner id. Newer API revisions omit it; callers fall
    /// back to the puuid as the league key.
    #[serde(default)]
    pub id: String,
    pub puuid: String,
    pub summoner_level: i64,
    #[serde(default)]
    pub profile_icon_id: i32,
    #[serde(default)]
    pub revision_date: i64,
}

// League V4 response, zero-or-one entry per queue
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub league_points: i32,
    #[serde(default)]
    pub wins: i32,
    #[serde(default)]
    pub losses: i32,
}

impl LeagueEntryDto {
    /// Queue code → the label organizers know.
    pub fn queue_label(&self) -> String {
        match self.queue_type.as_str() {
            "RANKED_SOLO_5x5" => s!("Solo Queue"),
            "RANKED_FLEX_SR" => s!("Flex 5v5"),
            "RANKED_TFT" => s!("TFT"),
            other => other.replace("RANKED_", "").replace('_', " "),
        }
    }

    pub fn total_games(&self) -> i32 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        if self.total_games() == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.total_games()) * 100.0
    }

    /// One display line: "GOLD II (45 LP) - 10W 5L (66.7% WR)"
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({} LP) - {}W {}L ({:.1}% WR)",
            self.tier,
            self.rank,
            self.league_points,
            self.wins,
            self.losses,
            self.win_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_decodes_camel_case() {
        let a: AccountDto = serde_json::from_str(
            r#"{"puuid":"p-123","gameName":"Faker","tagLine":"KR1"}"#,
        )
        .unwrap();
        assert_eq!(a.puuid, "p-123");
        assert_eq!(a.riot_id(), "Faker#KR1");
    }

    #[test]
    fn summoner_tolerates_missing_id() {
        let s: SummonerDto = serde_json::from_str(
            r#"{"puuid":"p-123","summonerLevel":412}"#,
        )
        .unwrap();
        assert!(s.id.is_empty());
        assert_eq!(s.summoner_level, 412);
    }

    #[test]
    fn league_entry_summary_formats() {
        let e = LeagueEntryDto {
            queue_type: s!("RANKED_SOLO_5x5"),
            tier: s!("GOLD"),
            rank: s!("II"),
            league_points: 45,
            wins: 10,
            losses: 5,
        };
        assert_eq!(e.queue_label(), "Solo Queue");
        assert_eq!(e.summary(), "GOLD II (45 LP) - 10W 5L (66.7% WR)");
    }

    #[test]
    fn unknown_queue_gets_a_readable_label() {
        let e = LeagueEntryDto {
            queue_type: s!("RANKED_FLEX_TT"),
            tier: s!("SILVER"),
            rank: s!("IV"),
            league_points: 0,
            wins: 0,
            losses: 0,
        };
        assert_eq!(e.queue_label(), "FLEX TT");
        assert_eq!(e.win_rate(), 0.0);
    }
}
