// src/config/consts.rs

// Net config
pub const SCHEDULE_URL: &str = "https://www.espn.com/nfl/schedule";
pub const OFFENSE_STATS_URL: &str = "https://www.espn.com/nfl/stats/team";
pub const DEFENSE_STATS_URL: &str = "https://www.espn.com/nfl/stats/team/_/view/defense";
pub const PLAYER_STATS_URL: &str = "https://www.nfl.com/players/{slug}/stats/";
pub const PLAYER_LOG_URL: &str = "https://www.nfl.com/players/{slug}/stats/logs/";
pub const TEAM_SCHEDULE_URL: &str = "https://www.espn.com/nfl/team/schedule/_/name/{slug}";
pub const TEAM_DEFENSE_URL: &str = "https://www.nfl.com/stats/team-stats/defense/{category}/2020/reg/all";

pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "ff_scrape/0.3";

// Scratch store (one directory per session, deleted after derivation)
pub const SCRATCH_PREFIX: &str = "temp_";
pub const SCHEDULE_PAGE: &str = "current_week_schedule";
pub const OFFENSE_PAGE: &str = "espn_offenses";
pub const DEFENSE_PAGE: &str = "espn_defenses";

// Roster input
pub const DEFAULT_ROSTER_FILE: &str = "players.txt";
pub const DEFENSE_TAG: &str = "defense";
// "defense: <team name>": name starts after the tag and separator
pub const DEFENSE_NAME_OFFSET: usize = 9;

// Report output
pub const REPORT_FILE_PREFIX: &str = "Week_";

// Log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
