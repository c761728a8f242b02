// src/config/consts.rs

// Net config
// Account-V1 is cluster-scoped, not platform-scoped; the europe cluster
// answers for every platform region we offer.
pub const ACCOUNT_HOST: &str = "https://europe.api.riotgames.com";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = "rift_scout/0.1.0";

// Env pre-fill (both optional)
pub const API_KEY_ENV: &str = "RIOT_API_KEY";
pub const REGION_ENV: &str = "RIOT_REGION";

// Logging
pub const LOG_FILE: &str = ".rift_scout/debug.log";

// Window
pub const WINDOW_W: f32 = 820.0;
pub const WINDOW_H: f32 = 600.0;
