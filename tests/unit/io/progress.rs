//! Tests for batch progress display lifecycle

use tilecarve::io::progress::ProgressManager;

#[test]
fn test_single_map_runs_stay_silent() {
    let mut manager = ProgressManager::new();
    manager.initialize(1);
    // Completing and finishing without a bar must be harmless
    manager.complete_map();
    manager.finish();
}

#[test]
fn test_batch_lifecycle() {
    let mut manager = ProgressManager::new();
    manager.initialize(3);
    for _ in 0..3 {
        manager.complete_map();
    }
    manager.finish();
}

#[test]
fn test_default_matches_new() {
    let manager = ProgressManager::default();
    manager.complete_map();
    manager.finish();
}
