//! Event decoding and listing helpers.
//!
//! Covers both wire shapes: nested open-data objects and flattened exports.

use touchline_core::{Error, Event, EventDetail, Location, MatchContext, Orientation, load_events, parse_events};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn one(json: &str) -> Event {
    let mut events = parse_events(json).unwrap_or_else(|e| panic!("decode failed: {e}"));
    assert_eq!(events.len(), 1);
    events.remove(0)
}

// ─── Nested open-data form ───────────────────────────────────────────────────

#[test]
fn nested_pass() {
    let e = one(r#"[{
        "id": "a1", "index": 5, "minute": 3, "second": 7,
        "type": {"id": 30, "name": "Pass"},
        "team": {"id": 217, "name": "Barcelona"},
        "player": {"id": 5503, "name": "Lionel Andrés Messi Cuccittini"},
        "location": [61.0, 40.1],
        "pass": {"end_location": [70.2, 33.0], "length": 11.4, "outcome": {"id": 9, "name": "Incomplete"}}
    }]"#);
    assert_eq!(e.kind, "Pass");
    assert_eq!(e.team, "Barcelona");
    assert_eq!(e.player.as_deref(), Some("Lionel Andrés Messi Cuccittini"));
    assert_eq!(e.location, Some(Location::new(61.0, 40.1)));
    assert_eq!(e.pass_end(), Some(Location::new(70.2, 33.0)));
    assert_eq!(e.detail_label(), "Pass: Incomplete");
    assert_eq!(e.clock_label(), "3:07");
}

#[test]
fn nested_shot_drops_height() {
    let e = one(r#"[{
        "type": {"name": "Shot"}, "team": {"name": "Barcelona"},
        "location": [108.0, 38.0],
        "shot": {"end_location": [120.0, 39.2, 1.1], "outcome": {"name": "Goal"}}
    }]"#);
    assert_eq!(e.detail, Some(EventDetail::Shot { outcome: Some("Goal".into()) }));
    assert_eq!(e.detail_label(), "Shot: Goal");
    assert_eq!(e.pass_end(), None);
}

#[test]
fn substitution_without_location() {
    let e = one(r#"[{
        "type": {"name": "Substitution"}, "team": {"name": "Real Madrid"},
        "minute": 61, "second": 0,
        "substitution": {"outcome": {"name": "Tactical"}, "replacement": {"name": "Someone"}}
    }]"#);
    assert_eq!(e.location, None);
    assert_eq!(e.detail_label(), "Sub: Tactical");
    assert_eq!(e.clock_label(), "61:00");
}

#[test]
fn complete_pass_has_no_outcome() {
    let e = one(r#"[{"type": "Pass", "team": "A", "location": [1, 2], "pass": {"end_location": [3, 4]}}]"#);
    assert_eq!(e.detail_label(), "Pass: Complete");
}

#[test]
fn plain_event_label_is_type() {
    let e = one(r#"[{"type": {"name": "Ball Recovery"}, "team": {"name": "A"}, "location": [5, 5]}]"#);
    assert_eq!(e.detail, None);
    assert_eq!(e.detail_label(), "Ball Recovery");
}

// ─── Flattened form ──────────────────────────────────────────────────────────

#[test]
fn flattened_pass_and_nulls() {
    let events = parse_events(r#"[
        {"type": "Pass", "team": "A", "player": "P", "minute": 1, "second": 2,
         "location": [10.0, 10.0], "pass_end_location": [20.0, 20.0], "pass_outcome": null,
         "shot_outcome": null},
        {"type": "Starting XI", "team": "A", "player": null, "location": null}
    ]"#).expect("decode");
    assert_eq!(events[0].pass_end(), Some(Location::new(20.0, 20.0)));
    assert_eq!(events[0].detail_label(), "Pass: Complete");
    assert_eq!(events[1].location, None);
    assert_eq!(events[1].player, None);
}

#[test]
fn flattened_shot_outcome() {
    let e = one(r#"[{"type": "Shot", "team": "B", "location": [100, 40], "shot_outcome": "Saved"}]"#);
    assert_eq!(e.detail_label(), "Shot: Saved");
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn short_location_is_rejected() {
    let err = parse_events(r#"[{"type": "Pass", "team": "A", "location": [1.0]}]"#).expect_err("should fail");
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().contains("at least 2"));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_events("/definitely/not/here/events.json").expect_err("should fail");
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn load_from_disk() {
    let path = std::env::temp_dir().join(format!("touchline-events-{}.json", std::process::id()));
    std::fs::write(&path, r#"[{"type": "Duel", "team": "A", "location": [1, 1]}]"#).expect("write");
    let events = load_events(&path).expect("load");
    std::fs::remove_file(&path).ok();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, "Duel");
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[test]
fn clock_pads_seconds() {
    assert_eq!(Event::new("Pass", "A").with_clock(0, 5).clock_label(), "0:05");
    assert_eq!(Event::new("Pass", "A").with_clock(93, 41).clock_label(), "93:41");
}

#[test]
fn query_matches_player_team_or_type() {
    let e = Event::new("Ball Recovery", "Barcelona").with_player("Sergio Busquets");
    assert!(e.matches_query(""));
    assert!(e.matches_query("busq"));
    assert!(!e.matches_query("BARCA"));
    assert!(e.matches_query("barcelona"));
    assert!(e.matches_query("recovery"));
    assert!(!e.matches_query("shot"));
    assert!(!Event::new("Pass", "A").matches_query("xavi"));
}

// ─── Match context ───────────────────────────────────────────────────────────

#[test]
fn orientation_follows_away_team() {
    let ctx = MatchContext::new("Home FC", "Away FC");
    assert_eq!(ctx.orientation_of("Away FC"), Orientation::Away);
    assert_eq!(ctx.orientation_of("Home FC"), Orientation::Home);
    assert_eq!(ctx.orientation_of("Someone Else"), Orientation::Home);
    assert_eq!(ctx.title(), "Home FC vs Away FC");
}

#[test]
fn infer_takes_first_two_teams() {
    let events = vec![
        Event::new("Starting XI", "Home FC"),
        Event::new("Half Start", "Home FC"),
        Event::new("Starting XI", "Away FC"),
        Event::new("Pass", "Third"),
    ];
    assert_eq!(MatchContext::infer(&events), MatchContext::new("Home FC", "Away FC"));
}

#[test]
fn given_home_team_is_kept() {
    let events = vec![
        Event::new("Starting XI", "Away FC"),
        Event::new("Starting XI", "Home FC"),
        Event::new("Pass", "Away FC"),
    ];
    let ctx = MatchContext::with_home("Home FC", &events);
    assert_eq!(ctx, MatchContext::new("Home FC", "Away FC"));
    assert_eq!(ctx.orientation_of("Away FC"), Orientation::Away);
}

#[test]
fn infer_with_one_team_has_no_away() {
    let ctx = MatchContext::infer(&[Event::new("Pass", "Solo")]);
    assert_eq!(ctx.home_team, "Solo");
    assert_eq!(ctx.away_team, None);
    assert_eq!(ctx.orientation_of("Solo"), Orientation::Home);
}
