use rustyheaders::{HeadersConfig, HttpHeaders, ValidationError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn set_cookie_scenario() {
    init_tracing();
    let mut headers = HttpHeaders::new();

    headers.append("Set-Cookie", "a=1").unwrap();
    headers.append("Set-Cookie", "b=2").unwrap();
    assert_eq!(headers.get("set-cookie").unwrap(), Some("a=1, b=2"));

    headers.delete("Set-Cookie").unwrap();
    assert!(!headers.has("set-cookie").unwrap());
    assert_eq!(headers.get("set-cookie").unwrap(), None);
}

#[test]
fn lookups_ignore_casing_and_trim_values() {
    init_tracing();
    let pairs = [
        ("Content-Type", " text/html "),
        ("x-request-id", "abc123"),
        ("ACCEPT", "*/*\u{0b}"),
    ];

    for (name, value) in pairs {
        let mut headers = HttpHeaders::new();
        headers.set(name, value).unwrap();

        let expected = value.trim();
        assert_eq!(headers.get(name).unwrap(), Some(expected));
        assert_eq!(headers.get(name.to_lowercase()).unwrap(), Some(expected));
        assert_eq!(headers.get(name.to_uppercase()).unwrap(), Some(expected));
        assert!(headers.has(name).unwrap());
    }
}

#[test]
fn has_follows_mutations() {
    init_tracing();
    let mut headers = HttpHeaders::new();
    assert!(!headers.has("Etag").unwrap());

    headers.append("ETag", "\"v1\"").unwrap();
    assert!(headers.has("etag").unwrap());

    headers.delete("etag").unwrap();
    assert!(!headers.has("ETAG").unwrap());

    headers.set("ETag", "").unwrap();
    assert!(headers.has("etag").unwrap());
}

#[test]
fn invalid_names_are_rejected() {
    init_tracing();
    let mut headers = HttpHeaders::new();

    for name in ["bad header", "Content Type", "", "x:y", "naïve"] {
        let err = headers.set(name, "x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidHeaderName {
                name: name.to_string()
            }
        );
    }
    assert!(headers.is_empty());
}

#[test]
fn invalid_values_are_rejected() {
    init_tracing();
    let mut headers = HttpHeaders::new();

    let err = headers.set("X-Test", "line1\nline2").unwrap_err();
    assert_eq!(err.kind(), "InvalidHeaderValue");

    for c in '\u{00}'..='\u{09}' {
        assert!(headers.set("X-Test", format!("a{c}b")).is_err(), "{c:?}");
    }
    headers.set("X-Test", "a\u{0b}b").unwrap();
    headers.set("X-Latin", "caf\u{e9}").unwrap();
    assert!(headers.set("X-Emoji", "\u{1f600}").is_err());

    assert_eq!(headers.get("x-test").unwrap(), Some("a\u{0b}b"));
    assert_eq!(headers.len(), 2);
}

#[test]
fn views_have_one_element_per_key() {
    init_tracing();
    let mut headers = HttpHeaders::new();
    headers.append("Accept", "text/html").unwrap();
    headers.append("accept", "application/json").unwrap();
    headers.set("Host", "example.com").unwrap();
    headers.set("Connection", "close").unwrap();
    headers.delete("accept").unwrap();
    headers.set("Server", "rustyheaders").unwrap();

    let entries: Vec<(&str, &str)> = headers.entries().collect();
    let keys: Vec<&str> = headers.keys().collect();
    let values: Vec<&str> = headers.values().collect();

    assert_eq!(entries.len(), headers.len());
    assert_eq!(keys.len(), headers.len());
    assert_eq!(values.len(), headers.len());
    for (i, (name, value)) in entries.iter().enumerate() {
        assert_eq!(keys[i], *name);
        assert_eq!(values[i], *value);
    }
    assert_eq!(headers.into_iter().count(), 3);
}

#[test]
fn headers_from_config() {
    init_tracing();
    let config = HeadersConfig::from_toml_str(
        r#"
        [defaults]
        Server = "rustyheaders/0.1"
        Cache-Control = " no-store "
        "#,
    )
    .unwrap();

    let headers = HttpHeaders::from_config(&config).unwrap();
    assert_eq!(
        headers.stringify(),
        "server: rustyheaders/0.1\r\ncache-control: no-store\r\n"
    );

    let config = HeadersConfig::from_toml_str(
        r#"
        [defaults]
        "Bad Name" = "x"
        "#,
    )
    .unwrap();
    assert!(HttpHeaders::from_config(&config).is_err());
}
