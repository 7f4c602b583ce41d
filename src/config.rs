//! Client configuration resolved at compile time.
//!
//! The WASM bundle has no process environment, so overrides are baked in via
//! `option_env!` when the crate is built:
//!
//! - `DINING_API_BASE`: prefix for REST calls, default `/api`
//! - `DINING_CLOCK_TICK_MS`: clock refresh interval, default 1000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_CLOCK_TICK_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub clock_tick_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), clock_tick_ms: DEFAULT_CLOCK_TICK_MS }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("DINING_API_BASE"), option_env!("DINING_CLOCK_TICK_MS"))
    }

    fn from_raw(api_base: Option<&str>, clock_tick_ms: Option<&str>) -> Self {
        Self { api_base: parse_api_base(api_base), clock_tick_ms: parse_tick_ms(clock_tick_ms) }
    }

    /// Join the API base with an endpoint path starting with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

fn parse_tick_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_CLOCK_TICK_MS)
}
