use shinyquest_core::SessionIdentity;
use shinyquest_db::*;

fn registered(name: &str) -> SessionIdentity {
    SessionIdentity::Registered(name.to_string())
}

/// Insert a hunt row with explicit counter/success, bypassing the
/// insert-then-mark flow, to build fixtures tersely.
fn raw_hunt(
    conn: &rusqlite::Connection,
    user: &str,
    creature: &str,
    method: &str,
    counter: i64,
    success: bool,
) {
    conn.execute(
        "INSERT INTO hunts (user_id, creature, game, method, counter, success)
         VALUES (?1, ?2, 'Unknown', ?3, ?4, ?5)",
        rusqlite::params![user, creature, method, counter, success],
    )
    .unwrap();
}

#[test]
fn profile_stats_aggregation_fixture() {
    let conn = open_memory().unwrap();
    raw_hunt(&conn, "red", "A", "M1", 3, true);
    raw_hunt(&conn, "red", "B", "M1", 5, true);
    raw_hunt(&conn, "red", "C", "M2", 1, false);

    let stats = profile_stats(&conn, "red").unwrap();
    assert_eq!(stats.total_hunts, 3);
    assert_eq!(stats.total_attempts, 9);
    assert_eq!(stats.successful_hunts, 2);
    assert_eq!(stats.unique_creatures_caught, 2);
    assert_eq!(stats.favorite_method.as_deref(), Some("M1"));
    // Average divides ALL attempts (successful or not) by success count:
    // 9 / 2, including the unsuccessful M2 hunt's attempt
    assert_eq!(stats.avg_attempts_per_success, 4.5);
}

#[test]
fn profile_stats_empty_account() {
    let conn = open_memory().unwrap();
    let stats = profile_stats(&conn, "red").unwrap();
    assert_eq!(stats.total_hunts, 0);
    assert_eq!(stats.favorite_method, None);
    assert_eq!(stats.avg_attempts_per_success, 0.0);
}

#[test]
fn profile_stats_no_successes_avoids_division() {
    let conn = open_memory().unwrap();
    raw_hunt(&conn, "red", "A", "M1", 50, false);

    let stats = profile_stats(&conn, "red").unwrap();
    assert_eq!(stats.total_attempts, 50);
    assert_eq!(stats.successful_hunts, 0);
    assert_eq!(stats.avg_attempts_per_success, 0.0);
}

#[test]
fn favorite_method_tie_breaks_alphabetically() {
    let conn = open_memory().unwrap();
    // Two rows each; "Breeding" < "Soft Reset" in the grouping order
    raw_hunt(&conn, "red", "A", "Soft Reset", 1, false);
    raw_hunt(&conn, "red", "B", "Soft Reset", 1, false);
    raw_hunt(&conn, "red", "C", "Breeding", 1, false);
    raw_hunt(&conn, "red", "D", "Breeding", 1, false);

    let stats = profile_stats(&conn, "red").unwrap();
    assert_eq!(stats.favorite_method.as_deref(), Some("Breeding"));
}

#[test]
fn profile_stats_counts_duplicate_creatures_once() {
    let conn = open_memory().unwrap();
    raw_hunt(&conn, "red", "Eevee", "Eggs", 10, true);
    raw_hunt(&conn, "red", "Eevee", "Eggs", 20, true);

    let stats = profile_stats(&conn, "red").unwrap();
    assert_eq!(stats.successful_hunts, 2);
    assert_eq!(stats.unique_creatures_caught, 1);
}

#[test]
fn profile_stats_scoped_to_username() {
    let conn = open_memory().unwrap();
    raw_hunt(&conn, "red", "A", "M1", 3, true);
    raw_hunt(&conn, "blue", "B", "M1", 7, true);

    let stats = profile_stats(&conn, "red").unwrap();
    assert_eq!(stats.total_hunts, 1);
    assert_eq!(stats.total_attempts, 3);
}

#[test]
fn catch_details_first_success_only() {
    let conn = open_memory().unwrap();
    let identity = registered("red");
    raw_hunt(&conn, "red", "Lapras", "Gift", 0, false);
    raw_hunt(&conn, "red", "Lapras", "Soft Reset", 31, true);
    raw_hunt(&conn, "red", "Lapras", "Trade", 2, true);

    let details = catch_details(&conn, &identity, "Lapras").unwrap().unwrap();
    assert_eq!(details.method, "Soft Reset");
    assert_eq!(details.counter, 31);

    assert!(catch_details(&conn, &identity, "Mew").unwrap().is_none());
}

#[test]
fn list_dex_scoped_and_ordered() {
    let conn = open_memory().unwrap();
    let identity = registered("red");
    raw_hunt(&conn, "red", "Zapdos", "Soft Reset", 100, true);
    raw_hunt(&conn, "red", "Articuno", "Soft Reset", 50, true);
    sync_dex(&conn, &identity).unwrap();

    let dex = list_dex(&conn, &identity).unwrap();
    assert_eq!(dex.len(), 2);
    assert!(dex.iter().all(|e| e.owner == "red"));

    assert!(list_dex(&conn, &registered("blue")).unwrap().is_empty());
}
