//! Unit tests for logging format selection

use signalscan::logging::is_production;

#[test]
fn test_production_names_select_json() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
}

#[test]
fn test_other_environments_stay_human_readable() {
    assert!(!is_production("sandbox"));
    assert!(!is_production("staging"));
    assert!(!is_production(""));
    // Exact match only
    assert!(!is_production("Production"));
}
