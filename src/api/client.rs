// src/api/client.rs
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::consts::{ACCOUNT_HOST, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::config::options::LookupOptions;
use crate::error::ApiError;

use super::models::{AccountDto, LeagueEntryDto, SummonerDto};

/// Thin client over the three read-only routes the scouting check uses.
/// One GET per call, key in the X-Riot-Token header, fixed timeout, no retry.
pub struct ApiClient {
    agent: ureq::Agent,
    key: String,
    account_base: String,
    platform_base: String,
}

impl ApiClient {
    pub fn new(options: &LookupOptions) -> Self {
        Self::with_bases(
            &options.api_key,
            s!(ACCOUNT_HOST),
            options.region.platform_base(),
        )
    }

    /// Explicit base URLs; tests point these at a mock server.
    pub fn with_bases(api_key: &str, account_base: String, platform_base: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();

        Self {
            agent,
            key: s!(api_key),
            account_base,
            platform_base,
        }
    }

    pub fn get_account(&self, game_name: &str, tag_line: &str) -> Result<AccountDto, ApiError> {
        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.account_base,
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line),
        );
        self.get_json(&url)
    }

    pub fn get_summoner(&self, puuid: &str) -> Result<SummonerDto, ApiError> {
        let url = format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.platform_base,
            urlencoding::encode(puuid),
        );
        self.get_json(&url)
    }

    pub fn get_ranked_entries(&self, summoner_id: &str) -> Result<Vec<LeagueEntryDto>, ApiError> {
        let url = format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.platform_base,
            urlencoding::encode(summoner_id),
        );
        self.get_json(&url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self
            .agent
            .get(url)
            .set("X-Riot-Token", &self.key)
            .set("Accept", "application/json")
            .set("User-Agent", USER_AGENT)
            .call();

        let body = match resp {
            Ok(r) => r
                .into_string()
                .map_err(|e| ApiError::Connection(e.to_string()))?,
            Err(ureq::Error::Status(404, _)) => return Err(ApiError::NotFound),
            Err(ureq::Error::Status(401 | 403, _)) => return Err(ApiError::Auth),
            Err(ureq::Error::Status(429, _)) => return Err(ApiError::RateLimit),
            Err(ureq::Error::Status(code, _)) => return Err(ApiError::Status(code)),
            Err(ureq::Error::Transport(t)) => return Err(ApiError::Connection(t.to_string())),
        };

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::Region;

    #[test]
    fn riot_id_path_segments_are_percent_encoded() {
        // Spaces and '#' must not leak into the path raw.
        assert_eq!(urlencoding::encode("Le Conservateur"), "Le%20Conservateur");
        assert_eq!(urlencoding::encode("K#R"), "K%23R");
    }

    #[test]
    fn bases_follow_selected_region() {
        let opts = LookupOptions { api_key: s!("k"), region: Region::Kr };
        let client = ApiClient::new(&opts);
        assert_eq!(client.platform_base, "https://kr.api.riotgames.com");
        assert_eq!(client.account_base, ACCOUNT_HOST);
    }
}
