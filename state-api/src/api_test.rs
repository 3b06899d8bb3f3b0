use super::*;

// =============================================================
// Helpers
// =============================================================

fn sample_json() -> serde_json::Value {
    serde_json::json!({
        "articles": [
            {"id": 1, "title": "T", "date": "2020-01-01", "body": "B", "authorId": 7},
            {"id": 2, "title": "Second", "date": "2020-02-14", "body": "More", "authorId": 8},
            {"id": 3, "title": "Third", "date": "2020-03-01T09:30:00Z", "body": "Even more", "authorId": 7}
        ],
        "authors": [
            {"id": 7, "firstName": "A", "lastName": "B", "website": "http://x"},
            {"id": 8, "firstName": "C", "lastName": "D", "website": "http://y"}
        ]
    })
}

fn sample_fixture() -> Fixture {
    serde_json::from_value(sample_json()).expect("fixture should parse")
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn articles_preserve_input_order_without_loss() {
    let api = DataApi::new(sample_fixture()).expect("fixture should validate");
    let ids: Vec<&str> = api.articles().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn authors_key_set_matches_input_ids() {
    let api = DataApi::new(sample_fixture()).expect("fixture should validate");
    let keys: Vec<&str> = api.authors().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["7", "8"]);
    assert_eq!(api.authors()["8"].first_name, "C");
}

#[test]
fn lookups_are_idempotent() {
    let api = DataApi::new(sample_fixture()).expect("fixture should validate");
    assert_eq!(api.articles(), api.articles());
    assert_eq!(api.authors(), api.authors());

    let again = DataApi::new(sample_fixture()).expect("fixture should validate");
    assert_eq!(api, again);
}

#[test]
fn from_json_matches_new() {
    let raw = sample_json().to_string();
    let api = DataApi::from_json(&raw).expect("fixture should validate");
    assert_eq!(api, DataApi::new(sample_fixture()).expect("fixture should validate"));
}

#[test]
fn empty_fixture_is_valid() {
    let api = DataApi::from_json("{}").expect("empty fixture should validate");
    assert!(api.articles().is_empty());
    assert!(api.authors().is_empty());
    assert!(api.initial_data().is_empty());
}

#[test]
fn initial_data_carries_both_collections() {
    let api = DataApi::new(sample_fixture()).expect("fixture should validate");
    let data = api.initial_data();
    assert_eq!(data.articles(), api.articles());
    assert_eq!(data.authors(), api.authors());
    assert_eq!(api.clone().into_initial_data(), data);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn unknown_author_is_rejected() {
    let mut fixture = sample_fixture();
    fixture.articles[1].author_id = "99".to_owned();
    let err = DataApi::new(fixture).expect_err("unknown author should fail");
    assert!(matches!(
        err,
        DataError::UnknownAuthor { ref article_id, ref author_id } if article_id == "2" && author_id == "99"
    ));
}

#[test]
fn duplicate_author_is_rejected() {
    let mut fixture = sample_fixture();
    let dup = fixture.authors[0].clone();
    fixture.authors.push(dup);
    let err = DataApi::new(fixture).expect_err("duplicate author should fail");
    assert!(matches!(err, DataError::DuplicateAuthor(ref id) if id == "7"));
}

#[test]
fn duplicate_article_is_rejected() {
    let mut fixture = sample_fixture();
    let dup = fixture.articles[0].clone();
    fixture.articles.push(dup);
    let err = DataApi::new(fixture).expect_err("duplicate article should fail");
    assert!(matches!(err, DataError::DuplicateArticle(ref id) if id == "1"));
}

#[test]
fn malformed_json_is_reported() {
    let err = DataApi::from_json("{\"articles\": [").expect_err("truncated json should fail");
    assert!(matches!(err, DataError::Json(_)));

    let err = DataApi::from_json(r#"{"articles": [{"id": 1}]}"#).expect_err("missing fields should fail");
    assert!(matches!(err, DataError::Json(_)));
}
