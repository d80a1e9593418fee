use chrono::{FixedOffset, NaiveDate, TimeDelta, TimeZone};
use coffeeconnect::core::countdown::{self, Instant};
use predicates::str::contains;

mod common;
use common::cc;

fn madrid(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    let offset = FixedOffset::east_opt(3_600).unwrap();
    Instant::Zoned(offset.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
}

fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Instant {
    let dt = NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap();
    Instant::Naive(dt)
}

#[test]
fn test_full_month_to_launch() {
    let now = madrid(2025, 10, 1, 12, 0, 0);
    let delta = countdown::remaining(now, Instant::Zoned(countdown::launch_time()));
    let b = countdown::breakdown(delta);

    assert_eq!((b.days, b.hours, b.minutes, b.seconds), (31, 0, 0, 0));
    assert_eq!(b.total_seconds(), 31 * 86_400);
    assert!(!b.is_zero());
}

#[test]
fn test_equal_instants_give_zero() {
    let launch = Instant::Zoned(countdown::launch_time());
    let delta = countdown::remaining(launch, launch);

    assert_eq!(delta, TimeDelta::zero());
    assert!(countdown::breakdown(delta).is_zero());
}

#[test]
fn test_past_launch_clamps_to_zero() {
    let now = madrid(2025, 12, 25, 9, 30, 0);
    let delta = countdown::remaining(now, Instant::Zoned(countdown::launch_time()));

    assert_eq!(delta, TimeDelta::zero());
    assert!(countdown::breakdown(delta).is_zero());
}

#[test]
fn test_naive_now_compares_by_wall_clock() {
    let now = naive(2025, 10, 1, 12, 0, 0);
    let delta = countdown::remaining(now, Instant::Zoned(countdown::launch_time()));

    assert_eq!(countdown::breakdown(delta).days, 31);
}

#[test]
fn test_zoned_now_against_naive_launch() {
    let now = madrid(2025, 10, 31, 23, 59, 59);
    let launch = naive(2025, 11, 1, 0, 0, 0);
    let delta = countdown::remaining(now, launch);

    assert_eq!(delta, TimeDelta::seconds(1));
}

#[test]
fn test_breakdown_splits_units() {
    let delta = TimeDelta::seconds(2 * 86_400 + 5 * 3_600 + 7 * 60 + 9);
    let b = countdown::breakdown(delta);

    assert_eq!((b.days, b.hours, b.minutes, b.seconds), (2, 5, 7, 9));
}

#[test]
fn test_breakdown_under_a_minute() {
    let b = countdown::breakdown(TimeDelta::seconds(59));
    assert_eq!((b.days, b.hours, b.minutes, b.seconds), (0, 0, 0, 59));
}

#[test]
fn test_breakdown_never_negative() {
    let b = countdown::breakdown(TimeDelta::seconds(-5));
    assert!(b.is_zero());
}

#[test]
fn test_cli_countdown_at_fixed_instant() {
    cc().args(["countdown", "--at", "2025-10-01T12:00:00+01:00"])
        .assert()
        .success()
        .stdout(contains("Days"))
        .stdout(contains("31"))
        .stdout(contains("Launch: 2025-11-01T12:00:00+01:00"));
}

#[test]
fn test_cli_countdown_short_format() {
    cc().args(["countdown", "--at", "2025-10-01T12:00:00+01:00", "--short"])
        .assert()
        .success()
        .stdout(contains(
            "Countdown to launch (Madrid): 31 days 00h 00m 00s",
        ));
}

#[test]
fn test_cli_countdown_accepts_naive_instants() {
    cc().args(["countdown", "--at", "2025-10-01T12:00", "--short"])
        .assert()
        .success()
        .stdout(contains("31 days 00h 00m 00s"));
}

#[test]
fn test_cli_countdown_after_launch_is_live() {
    cc().args(["countdown", "--at", "2025-11-01T12:00:01+01:00"])
        .assert()
        .success()
        .stdout(contains("We're live"));
}

#[test]
fn test_cli_countdown_json() {
    cc().args(["countdown", "--json", "--at", "2025-10-01T12:00:00+01:00"])
        .assert()
        .success()
        .stdout(contains("\"days\": 31"))
        .stdout(contains("\"live\": false"))
        .stdout(contains("\"total_seconds\": 2678400"));
}

#[test]
fn test_cli_countdown_json_when_live() {
    cc().args(["countdown", "--json", "--at", "2026-01-01T00:00:00+01:00"])
        .assert()
        .success()
        .stdout(contains("\"live\": true"))
        .stdout(contains("\"days\": 0"));
}

#[test]
fn test_cli_countdown_rejects_unparseable_instant() {
    cc().args(["countdown", "--at", "next tuesday"])
        .assert()
        .failure()
        .stderr(contains("Invalid instant"))
        .stderr(contains("❌"));
}
