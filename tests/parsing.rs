use std::fs;
use std::path::PathBuf;

use ipl_terminal::team_api::{MatchRecord, RawMatch, parse_team_matches_json};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_team_matches_fixture() {
    let raw = read_fixture("team_rcb.json");
    let data = parse_team_matches_json(&raw).expect("fixture should parse");
    assert_eq!(
        data.team_banner_url,
        "https://assets.ccbp.in/frontend/react-js/rcb-team-banner.png"
    );
    assert_eq!(data.latest_match.id, "1216545");
    assert_eq!(data.latest_match.competing_team, "Delhi Capitals");
    assert_eq!(data.latest_match.man_of_the_match, "AB de Villiers");
    assert_eq!(data.latest_match.match_status, "Won");

    let ids: Vec<&str> = data.recent_matches.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1216538", "1216530", "1216522", "1216510"]);
}

#[test]
fn normalizing_is_a_pure_rename() {
    let raw: RawMatch = serde_json::from_str(
        r#"{
            "umpires": " U1 , U2 ",
            "result": "Won by 6 wickets",
            "man_of_the_match": "Player",
            "id": "42",
            "date": "2020-11-02",
            "venue": "At Venue",
            "competing_team": "Other",
            "competing_team_logo": "https://logo",
            "first_innings": "Other",
            "second_innings": "Us",
            "match_status": "won"
        }"#,
    )
    .expect("raw match should parse");

    let record = MatchRecord::from(raw);
    assert_eq!(
        record,
        MatchRecord {
            umpires: " U1 , U2 ".to_string(),
            result: "Won by 6 wickets".to_string(),
            man_of_the_match: "Player".to_string(),
            id: "42".to_string(),
            date: "2020-11-02".to_string(),
            venue: "At Venue".to_string(),
            competing_team: "Other".to_string(),
            competing_team_logo: "https://logo".to_string(),
            first_innings: "Other".to_string(),
            second_innings: "Us".to_string(),
            match_status: "won".to_string(),
        }
    );
}

#[test]
fn missing_fields_become_empty_strings() {
    let raw = read_fixture("team_partial.json");
    let data = parse_team_matches_json(&raw).expect("partial fixture should parse");
    assert_eq!(data.latest_match.competing_team, "Mystery XI");
    assert_eq!(data.latest_match.venue, "");
    assert_eq!(data.recent_matches.len(), 3);
    assert_eq!(data.recent_matches[1].match_status, "");
}

#[test]
fn normalized_record_serializes_with_camel_case_keys() {
    let raw = read_fixture("team_rcb.json");
    let data = parse_team_matches_json(&raw).expect("fixture should parse");
    let value = serde_json::to_value(&data).expect("serialize");

    assert!(value.get("teamBannerURL").is_some());
    let latest = value.get("latestMatch").expect("latestMatch key");
    assert_eq!(latest["manOfTheMatch"], "AB de Villiers");
    assert_eq!(latest["competingTeamLogo"], data.latest_match.competing_team_logo);
    assert_eq!(latest["matchStatus"], "Won");
    assert_eq!(value["recentMatches"].as_array().map(|a| a.len()), Some(4));
}

#[test]
fn empty_and_null_bodies_are_errors() {
    assert!(parse_team_matches_json("").is_err());
    assert!(parse_team_matches_json("  null \n").is_err());
}

#[test]
fn body_without_latest_match_is_an_error() {
    let err = parse_team_matches_json(r#"{"message":"Not Found"}"#).unwrap_err();
    assert!(format!("{err:#}").contains("invalid team matches json"));
}

#[test]
fn null_fields_become_empty_strings() {
    let raw = read_fixture("team_nullable.json");
    let data = parse_team_matches_json(&raw).expect("null fields should not reject the payload");
    assert_eq!(data.latest_match.id, "1216555");
    assert_eq!(data.latest_match.man_of_the_match, "");
    assert_eq!(data.latest_match.competing_team_logo, "");
    assert_eq!(data.latest_match.venue, "At Dubai International Cricket Stadium, Dubai");

    let recent = &data.recent_matches[0];
    assert_eq!(recent.umpires, "");
    assert_eq!(recent.match_status, "");
    assert_eq!(recent.man_of_the_match, "Marcus Stoinis");
}

#[test]
fn body_without_recent_matches_is_an_error() {
    let err = parse_team_matches_json(
        r#"{"team_banner_url":"b","latest_match_details":{"id":"1"}}"#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("invalid team matches json"));
}
