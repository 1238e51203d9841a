// src/config/consts.rs

// Logging
pub const LOG_TARGET: &str = "sportgraph";

// Envelope codes
pub const API_OK: u16 = 200;
pub const API_BAD_REQUEST: u16 = 400;

// First season each league has usable records for (opening day in comments)
pub const MLB_ORIGIN_YEAR: i32 = 1876;   // 1876-04-22
pub const NBA_ORIGIN_YEAR: i32 = 1946;   // 1946-11-01
pub const NCAAB_ORIGIN_YEAR: i32 = 1947; // 1947-01-01
pub const NCAAF_ORIGIN_YEAR: i32 = 2000; // 2000-08-26
pub const NFL_ORIGIN_YEAR: i32 = 1970;   // 1970-09-18
pub const NHL_ORIGIN_YEAR: i32 = 1918;   // 1918-12-21

// Edge game keys
pub const GAME_NUM_KEY: &str = "game_num";
pub const WEEK_KEY: &str = "week";
