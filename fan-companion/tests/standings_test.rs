mod common;

use common::init_tracing;
use fan_companion::fixtures::demo_groups;
use fan_companion::standings::{compare_records, validate_group, validate_record, MAX_RECENT_RESULTS};
use fan_companion::{rank, rank_all, rank_group, CompanionError, MatchResult, TeamRecord};
use std::cmp::Ordering;
use tracing::info;

fn record(key: &str, name: &str, wins: u32, draws: u32, losses: u32, goals_for: u32, goals_against: u32) -> TeamRecord {
    TeamRecord {
        country_key: key.to_string(),
        display_name: name.to_string(),
        played: wins + draws + losses,
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        recent_results: Vec::new(),
    }
}

fn keys(teams: &[TeamRecord]) -> Vec<&str> {
    teams.iter().map(|t| t.country_key.as_str()).collect()
}

/// Every adjacent pair must be ordered by the first criterion that differs.
fn assert_table_order(teams: &[TeamRecord]) {
    for pair in teams.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ordered = a.points() > b.points()
            || (a.points() == b.points() && a.goal_difference() > b.goal_difference())
            || (a.points() == b.points() && a.goal_difference() == b.goal_difference() && a.goals_for > b.goals_for)
            || (a.points() == b.points()
                && a.goal_difference() == b.goal_difference()
                && a.goals_for == b.goals_for
                && a.display_name <= b.display_name);
        assert!(ordered, "{} should not precede {}", a.display_name, b.display_name);
    }
}

fn assert_permutation(input: &[TeamRecord], output: &[TeamRecord]) {
    assert_eq!(input.len(), output.len());
    let mut before: Vec<&str> = keys(input);
    let mut after: Vec<&str> = keys(output);
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn test_demo_groups_rank_like_the_final_tables() {
    init_tracing();

    let ranked = rank_all(&demo_groups());
    for group in &ranked {
        info!("{}: {:?}", group.name, keys(&group.teams));
    }

    assert_eq!(ranked.len(), 3);
    assert_eq!(keys(&ranked[0].teams), vec!["netherlands", "senegal", "ecuador", "qatar"]);
    assert_eq!(keys(&ranked[1].teams), vec!["england", "unitedstates", "iran", "wales"]);
    // Poland and Mexico are level on points; goal difference separates them.
    assert_eq!(keys(&ranked[2].teams), vec!["argentina", "poland", "mexico", "saudiarabia"]);
}

#[test]
fn test_each_tiebreak_tier() {
    init_tracing();

    let teams = vec![
        record("c", "Charlie", 1, 0, 2, 3, 3), // 3 pts, gd 0, gf 3
        record("a", "Alpha", 1, 0, 2, 2, 2),   // 3 pts, gd 0, gf 2
        record("e", "Echo", 2, 0, 1, 1, 5),    // 6 pts, gd -4
        record("d", "Delta", 1, 0, 2, 4, 2),   // 3 pts, gd 2
        record("b", "Bravo", 1, 0, 2, 2, 2),   // identical to Alpha but for the name
    ];

    let ranked = rank(&teams);
    assert_eq!(keys(&ranked), vec!["e", "d", "c", "a", "b"]);
    assert_table_order(&ranked);
    assert_permutation(&teams, &ranked);
}

#[test]
fn test_rank_is_a_permutation_for_any_input_order() {
    init_tracing();

    for group in demo_groups() {
        let mut reversed = group.teams.clone();
        reversed.reverse();
        for input in [group.teams.clone(), reversed] {
            let ranked = rank(&input);
            assert_permutation(&input, &ranked);
            assert_table_order(&ranked);
            assert_eq!(keys(&ranked), keys(&rank(&group.teams)));
        }
    }
}

#[test]
fn test_rank_does_not_touch_the_input() {
    init_tracing();

    let group = demo_groups().remove(2);
    let before = keys(&group.teams).join(",");
    let ranked = rank_group(&group);
    assert_eq!(keys(&group.teams).join(","), before);
    assert_eq!(ranked.name, "Group C");
}

#[test]
fn test_empty_and_single_team_groups() {
    init_tracing();

    assert!(rank(&[]).is_empty());
    let single = vec![record("mexico", "Mexico", 0, 0, 0, 0, 0)];
    assert_eq!(keys(&rank(&single)), vec!["mexico"]);
}

#[test]
fn test_name_comparison_is_the_last_resort() {
    let a = record("a", "Argentina", 1, 1, 1, 3, 3);
    let b = record("b", "Brazil", 1, 1, 1, 3, 3);
    assert_eq!(compare_records(&a, &b), Ordering::Less);
    assert_eq!(compare_records(&b, &a), Ordering::Greater);
    assert_eq!(compare_records(&a, &a), Ordering::Equal);
}

#[test]
fn test_validation() {
    init_tracing();

    for group in demo_groups() {
        validate_group(&group).expect("demo groups are consistent");
    }

    let mut miscounted = record("wales", "Wales", 0, 1, 2, 1, 6);
    miscounted.played = 4;
    assert!(matches!(
        validate_record(&miscounted),
        Err(CompanionError::InvalidRecord { ref key, .. }) if key == "wales"
    ));

    let mut chatty = record("iran", "Iran", 1, 0, 2, 4, 7);
    chatty.recent_results = vec![MatchResult::Win; MAX_RECENT_RESULTS + 1];
    assert!(validate_record(&chatty).is_err());

    let mut absurd = record("qatar", "Qatar", 0, 0, 0, 0, 0);
    absurd.wins = u32::MAX;
    absurd.draws = u32::MAX;
    absurd.played = 3;
    assert!(validate_record(&absurd).is_err());
    assert_eq!(rank(&[absurd]).len(), 1);

    let mut duplicated = demo_groups().remove(0);
    duplicated.teams.push(duplicated.teams[0].clone());
    let err = validate_group(&duplicated).expect_err("duplicate country key");
    info!("Rejected group: {}", err);
    assert!(err.to_string().contains("netherlands"));
}
