use super::*;

fn local() -> ClientConfig {
    ClientConfig::default().with_api_base(DEFAULT_API_BASE)
}

#[test]
fn default_points_at_local_backend() {
    let config = ClientConfig::default();
    assert!(!config.api_base.ends_with('/'));
    assert_eq!(config.token_cookie, "token");
    assert_eq!(config.index_page, "index.html");
    assert_eq!(config.add_review_page, "add_review.html");
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn endpoints_join_base_and_path() {
    let config = local();
    assert_eq!(config.login_url(), "http://127.0.0.1:5000/api/v1/login");
    assert_eq!(config.places_url(), "http://127.0.0.1:5000/api/v1/places");
    assert_eq!(config.place_url("p1"), "http://127.0.0.1:5000/api/v1/places/p1");
    assert_eq!(
        config.place_reviews_url("p1"),
        "http://127.0.0.1:5000/api/v1/places/p1/reviews"
    );
    assert_eq!(config.user_url("u9"), "http://127.0.0.1:5000/api/v1/users/u9");
    assert_eq!(config.reviews_url(), "http://127.0.0.1:5000/api/v1/reviews");
}

#[test]
fn with_api_base_trims_trailing_slashes() {
    let config = ClientConfig::default().with_api_base(" https://api.example.com/v1// ");
    assert_eq!(config.api_base, "https://api.example.com/v1");
    assert_eq!(config.places_url(), "https://api.example.com/v1/places");
}

#[test]
fn from_lookup_applies_meta_overrides() {
    let config = ClientConfig::from_lookup(|name| match name {
        META_API_BASE => Some("https://hbnb.test/api/v1/".to_owned()),
        META_LOG_LEVEL => Some("warn".to_owned()),
        _ => None,
    });
    assert_eq!(config.api_base, "https://hbnb.test/api/v1");
    assert_eq!(config.log_level, log::Level::Warn);
}

#[test]
fn from_lookup_ignores_blank_and_invalid_values() {
    let config = ClientConfig::from_lookup(|name| match name {
        META_API_BASE => Some("   ".to_owned()),
        META_LOG_LEVEL => Some("loud".to_owned()),
        _ => None,
    });
    assert_eq!(config, ClientConfig::default());
}
