//! Server configuration from environment.

use std::env;
use survey_core::GridTraversal;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_path: String,
    pub database_max_connections: u32,
    /// Tallest tree accepted by `POST /estate/:id/tree`
    pub max_tree_height: u32,
    /// Largest length or width accepted by `POST /estate`
    pub max_estate_dimension: u32,
    /// Grid walk used by the landing search
    pub grid_traversal: GridTraversal,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            database_path: "data/survey.db".to_string(),
            database_max_connections: 5,
            max_tree_height: 30,
            max_estate_dimension: 50_000,
            grid_traversal: GridTraversal::SwapEachRow,
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_env("SURVEY_PORT").unwrap_or(defaults.server_port),
            database_path: env::var("SURVEY_DATABASE_PATH")
                .unwrap_or(defaults.database_path),
            database_max_connections: parse_env("SURVEY_DATABASE_MAX_CONNECTIONS")
                .unwrap_or(defaults.database_max_connections),
            max_tree_height: parse_env("SURVEY_MAX_TREE_HEIGHT")
                .unwrap_or(defaults.max_tree_height),
            max_estate_dimension: parse_env("SURVEY_MAX_ESTATE_DIMENSION")
                .unwrap_or(defaults.max_estate_dimension),
            grid_traversal: env::var("SURVEY_GRID_TRAVERSAL")
                .ok()
                .and_then(|s| parse_traversal(&s))
                .unwrap_or(defaults.grid_traversal),
            log_json: env::var("SURVEY_LOG_JSON")
                .map(|s| matches!(s.trim(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_json),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn parse_traversal(value: &str) -> Option<GridTraversal> {
    match value.trim().to_ascii_lowercase().as_str() {
        "swap" | "swap_each_row" => Some(GridTraversal::SwapEachRow),
        "fixed" => Some(GridTraversal::Fixed),
        _ => None,
    }
}
