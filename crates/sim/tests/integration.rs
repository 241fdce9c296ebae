use egg_scramble_shared::config::{SweepConfig, CSV_HEADER};
use egg_scramble_shared::SimError;
use egg_scramble_sim::runner::{run_box_size, run_sweep};
use egg_scramble_sim::theory::exact_derangement_probability;
use egg_scramble_sim::writer::{append_results, read_results, ResultWriter, WriteMode};

#[test]
fn test_two_eggs_converge_to_half() {
    let result = run_box_size(2, 100_000, Some(42), None).unwrap();
    assert_eq!(result.num_trials, 100_000);
    assert!(
        (result.derangement_probability - 0.5).abs() < 0.01,
        "probability: {}",
        result.derangement_probability
    );
    assert!(
        (result.mean_fixed_points - 1.0).abs() < 0.02,
        "mean: {}",
        result.mean_fixed_points
    );
    // Two eggs either both stay or both swap.
    assert_eq!(
        result.total_fixed_points,
        2 * (result.num_trials - result.derangement_count)
    );
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let a = run_box_size(12, 20_000, Some(7), Some(1)).unwrap();
    let b = run_box_size(12, 20_000, Some(7), Some(1)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_worker_count_does_not_change_result() {
    let sequential = run_box_size(10, 50_000, Some(99), Some(1)).unwrap();
    let parallel = run_box_size(10, 50_000, Some(99), Some(4)).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_sweep_matches_single_runs() {
    let config = SweepConfig::new(vec![3, 5], 10_000).with_seed(Some(3));
    let sweep = run_sweep(&config, Some(2), |_| {}).unwrap();
    assert_eq!(sweep[0], run_box_size(3, 10_000, Some(3), Some(3)).unwrap());
    assert_eq!(sweep[1], run_box_size(5, 10_000, Some(3), Some(1)).unwrap());
}

#[test]
fn test_statistics_track_theory() {
    let config = SweepConfig::new(vec![3, 8, 50], 100_000).with_seed(Some(2024));
    for result in run_sweep(&config, None, |_| {}).unwrap() {
        let exact = exact_derangement_probability(result.box_size);
        assert!(
            (result.derangement_probability - exact).abs() < 0.01,
            "n={} sim={} exact={}",
            result.box_size,
            result.derangement_probability,
            exact
        );
        assert!((result.mean_fixed_points - 1.0).abs() < 0.03);
        assert!(result.mean_fixed_points <= result.box_size as f64);
        assert!((0.0..=1.0).contains(&result.derangement_probability));
    }
}

#[test]
fn test_invalid_sweep_fails_fast() {
    let config = SweepConfig::new(vec![2, 3], 0);
    assert!(matches!(
        run_sweep(&config, Some(1), |_| panic!("no trial should run")),
        Err(SimError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_append_keeps_single_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let small_config = SweepConfig::new(vec![2, 3], 2_000).with_seed(Some(1));
    let small = run_sweep(&small_config, Some(2), |_| {}).unwrap();
    let mut writer = ResultWriter::open(&path, WriteMode::Truncate).unwrap();
    writer.write_results(&small).unwrap();
    drop(writer);

    let large_config = SweepConfig::new(vec![100], 500).with_seed(Some(1));
    let large = run_sweep(&large_config, Some(2), |_| {}).unwrap();
    append_results(&path, &large).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.iter().filter(|l| **l == CSV_HEADER).count(), 1);
    assert!(lines[1].starts_with("2,"));
    assert!(lines[2].starts_with("3,"));
    assert!(lines[3].starts_with("100,"));
}

#[test]
fn test_written_rows_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");

    let config = SweepConfig::new(vec![2, 4, 7], 3_000).with_seed(Some(11));
    let results = run_sweep(&config, None, |_| {}).unwrap();
    append_results(&path, &results).unwrap();

    let back = read_results(&path).unwrap();
    assert_eq!(back.len(), results.len());
    for (written, parsed) in results.iter().zip(&back) {
        assert_eq!(written.box_size, parsed.box_size);
        assert!((written.mean_fixed_points - parsed.mean_fixed_points).abs() <= 5e-7);
        assert!(
            (written.derangement_probability - parsed.derangement_probability).abs() <= 5e-7
        );
    }
}
