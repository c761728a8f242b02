// src/config/options.rs
use std::env;

use super::consts::{API_KEY_ENV, REGION_ENV};

/// Platform regions the scouting form offers. Fixed set; each code maps to
/// one platform hostname.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Euw1,
    Eun1,
    Na1,
    Kr,
    Br1,
    Jp1,
    Ru,
    Oc1,
    Tr1,
    La1,
    La2,
}

use Region::*;

impl Region {
    pub const ALL: &'static [Region] =
        &[Euw1, Eun1, Na1, Kr, Br1, Jp1, Ru, Oc1, Tr1, La1, La2];

    /// Platform code as it appears in hostnames and env config.
    pub fn code(&self) -> &'static str {
        match self {
            Euw1 => "euw1",
            Eun1 => "eun1",
            Na1 => "na1",
            Kr => "kr",
            Br1 => "br1",
            Jp1 => "jp1",
            Ru => "ru",
            Oc1 => "oc1",
            Tr1 => "tr1",
            La1 => "la1",
            La2 => "la2",
        }
    }

    /// Human label for the region selector.
    pub fn label(&self) -> &'static str {
        match self {
            Euw1 => "Europe West",
            Eun1 => "Europe Nordic & East",
            Na1 => "North America",
            Kr => "Korea",
            Br1 => "Brazil",
            Jp1 => "Japan",
            Ru => "Russia",
            Oc1 => "Oceania",
            Tr1 => "Turkey",
            La1 => "Latin America North",
            La2 => "Latin America South",
        }
    }

    /// Base URL of the platform host for summoner/league routes.
    pub fn platform_base(&self) -> String {
        format!("https://{}.api.riotgames.com", self.code())
    }

    pub fn from_code(code: &str) -> Option<Region> {
        let code = code.trim().to_ascii_lowercase();
        Region::ALL.iter().copied().find(|r| r.code() == code)
    }
}

impl Default for Region {
    fn default() -> Self {
        Euw1
    }
}

/// Session configuration: the key and region every request carries.
/// Passed into the client and the form at construction; nothing global.
#[derive(Clone, Debug)]
pub struct LookupOptions {
    pub api_key: String,
    pub region: Region,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self { api_key: s!(), region: Region::default() }
    }
}

impl LookupOptions {
    /// Optional pre-fill from the environment (and a .env file if present).
    /// Missing variables are not an error; the form just starts empty.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_key = env::var(API_KEY_ENV).unwrap_or_default();
        let region = env::var(REGION_ENV)
            .ok()
            .and_then(|code| Region::from_code(&code))
            .unwrap_or_default();

        Self { api_key, region }
    }
}
