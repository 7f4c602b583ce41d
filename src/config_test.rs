use super::*;

#[test]
fn defaults_use_api_prefix_and_one_second_tick() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.clock_tick_ms, 1000);
}

#[test]
fn missing_overrides_fall_back_to_defaults() {
    assert_eq!(ClientConfig::from_raw(None, None), ClientConfig::default());
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let cfg = ClientConfig::from_raw(Some("https://pos.example.com/api/"), None);
    assert_eq!(cfg.api_base, "https://pos.example.com/api");
    assert_eq!(cfg.endpoint("/floors"), "https://pos.example.com/api/floors");
}

#[test]
fn blank_api_base_uses_default() {
    let cfg = ClientConfig::from_raw(Some("   "), None);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn root_api_base_yields_bare_paths() {
    let cfg = ClientConfig::from_raw(Some("/"), None);
    assert_eq!(cfg.endpoint("/tables?floor=1"), "/tables?floor=1");
}

#[test]
fn tick_override_is_parsed() {
    let cfg = ClientConfig::from_raw(None, Some(" 250 "));
    assert_eq!(cfg.clock_tick_ms, 250);
}

#[test]
fn zero_or_invalid_tick_uses_default() {
    assert_eq!(ClientConfig::from_raw(None, Some("0")).clock_tick_ms, DEFAULT_CLOCK_TICK_MS);
    assert_eq!(ClientConfig::from_raw(None, Some("fast")).clock_tick_ms, DEFAULT_CLOCK_TICK_MS);
}
