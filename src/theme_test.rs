use super::*;

// =============================================================
// next_after
// =============================================================

#[test]
fn next_after_unset_is_dark() {
    assert_eq!(Theme::next_after(None), Theme::Dark);
}

#[test]
fn next_after_dark_is_light() {
    assert_eq!(Theme::next_after(Some("dark")), Theme::Light);
}

#[test]
fn next_after_light_is_dark() {
    assert_eq!(Theme::next_after(Some("light")), Theme::Dark);
}

#[test]
fn next_after_unknown_value_is_dark() {
    assert_eq!(Theme::next_after(Some("solarized")), Theme::Dark);
    assert_eq!(Theme::next_after(Some("")), Theme::Dark);
    assert_eq!(Theme::next_after(Some("DARK")), Theme::Dark);
}

// =============================================================
// Conversions
// =============================================================

#[test]
fn as_str_matches_display() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn parse_accepts_exact_names_only() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(UnknownTheme("Dark".into())));
}
