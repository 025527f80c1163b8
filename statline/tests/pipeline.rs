//! End-to-end tests for the analysis pipeline: raw text in, summary out.

use statline::prelude::*;

#[test]
fn test_textbook_sample() {
    let summary: Summary<f64> = analyze("1 2 3 4 5").unwrap();

    assert_eq!(summary.count, 5);
    assert_eq!(summary.sum, 15.0);
    assert_eq!(summary.mean, 3.0);
    assert_eq!(summary.median, 3.0);
    assert!(summary.modes.is_amodal());
    assert_eq!(summary.sample_variance, 2.5);
    assert!((summary.sample_std_dev - 1.5811388300841898).abs() < 1e-10);
}

#[test]
fn test_even_count_median() {
    let summary: Summary<f64> = analyze("10 20 30 40").unwrap();

    assert_eq!(summary.median, 25.0);
    assert_eq!(
        summary.sorted.median_span,
        MedianSpan::Pair { lower: 2, upper: 3 }
    );
}

#[test]
fn test_odd_count_median_position() {
    let summary: Summary<f64> = analyze("9 1 5").unwrap();

    assert_eq!(summary.median, 5.0);
    assert_eq!(summary.sorted.median_span, MedianSpan::Single { position: 2 });
}

#[test]
fn test_single_mode() {
    let summary: Summary<f64> = analyze("15 20 18 22 15 30").unwrap();

    assert_eq!(
        summary.modes,
        Modes::Modal {
            values: vec![15.0],
            frequency: 2
        }
    );
}

#[test]
fn test_tied_modes_keep_first_seen_order() {
    let summary: Summary<f64> = analyze("1 1 2 2").unwrap();
    assert_eq!(summary.modes.values(), &[1.0, 2.0]);

    let summary: Summary<f64> = analyze("2 2 1 1").unwrap();
    assert_eq!(summary.modes.values(), &[2.0, 1.0]);
}

#[test]
fn test_constant_sample() {
    let summary: Summary<f64> = analyze("5 5 5 5").unwrap();

    assert_eq!(summary.sample_variance, 0.0);
    assert_eq!(summary.sample_std_dev, 0.0);
    assert_eq!(summary.trend.slope, 0.0);
    assert_eq!(summary.trend.intercept, 5.0);
    assert_eq!(summary.diagnostics.ss_tot, 0.0);
    assert_eq!(summary.diagnostics.r_squared, 1.0);
}

#[test]
fn test_linear_sample_fits_exactly() {
    let summary: Summary<f64> = analyze("2 4 6 8 10").unwrap();

    assert!((summary.trend.slope - 2.0).abs() < 1e-12);
    assert!((summary.trend.intercept - 2.0).abs() < 1e-12);
    assert!((summary.diagnostics.r_squared - 1.0).abs() < 1e-12);
}

#[test]
fn test_mixed_separators() {
    let summary: Summary<f64> = analyze("10, 20  30,40").unwrap();
    assert_eq!(summary.values, vec![10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn test_invalid_token_is_reported() {
    let err = analyze::<f64>("10 abc 30").unwrap_err();

    assert_eq!(
        err,
        StatlineError::InvalidNumber {
            token: "abc".to_string(),
            position: 2,
        }
    );
    assert_eq!(err.to_string(), "invalid number 'abc' at position 2");
}

#[test]
fn test_too_few_values() {
    let err = analyze::<f64>("42").unwrap_err();
    assert_eq!(err, StatlineError::TooFewValues { got: 1, min: 2 });
    assert_eq!(err.to_string(), "need at least 2 values to analyze, got 1");

    let err = analyze::<f64>("").unwrap_err();
    assert_eq!(err, StatlineError::TooFewValues { got: 0, min: 2 });
}

#[test]
fn test_programmatic_non_finite_is_caught() {
    let sample = Sample::from_values(vec![1.0, f64::NAN, 3.0]);
    let err = Validator::validate(sample).unwrap_err();
    assert!(matches!(
        err,
        StatlineError::InvalidNumber { position: 2, .. }
    ));
}

#[test]
fn test_identical_inputs_identical_summaries() {
    let a: Summary<f64> = analyze("3 1 4 1 5 9 2 6").unwrap();
    let b: Summary<f64> = analyze("3 1 4 1 5 9 2 6").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_f32_pipeline() {
    let summary: Summary<f32> = analyze("1 2 3 4").unwrap();

    assert_eq!(summary.mean, 2.5);
    assert_eq!(summary.median, 2.5);
    assert!((f64::from(summary.sample_variance) - 5.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_stepwise_pipeline_matches_analyze() {
    let sample: Sample<f64> = "4 8 15 16 23 42".parse().unwrap();
    let checked = Validator::validate(sample).unwrap();
    let stepwise = summarize(checked);

    let direct: Summary<f64> = analyze("4 8 15 16 23 42").unwrap();
    assert_eq!(stepwise, direct);
}

#[test]
fn test_summary_serializes_round_trip() {
    let summary: Summary<f64> = analyze("10 20 30 40").unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    let restored: Summary<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(summary, restored);
}

#[test]
fn test_summary_display_sections() {
    let summary: Summary<f64> = analyze("1 2 3 4 5").unwrap();
    let rendered = summary.to_string();

    assert!(rendered.contains("Count: 5"));
    assert!(rendered.contains("Mean: 3.0000"));
    assert!(rendered.contains("Modes: none (amodal)"));
    assert!(rendered.contains("R^2:"));
}

#[test]
fn test_sorted_view_marks_median_rows() {
    let summary: Summary<f64> = analyze("40 10 30 20").unwrap();
    let rendered = summary.sorted.to_string();

    let marked: Vec<&str> = rendered
        .lines()
        .filter(|line| line.contains("<- median"))
        .collect();
    assert_eq!(marked.len(), 2);
    assert!(marked[0].contains("20.0000"));
    assert!(marked[1].contains("30.0000"));
}

#[test]
fn test_walkthrough_covers_every_statistic() {
    let summary: Summary<f64> = analyze("10 20 30 40").unwrap();
    let walkthrough = Walkthrough::for_summary(&summary);

    let titles: Vec<&str> = walkthrough
        .steps
        .iter()
        .map(|step| step.title.as_str())
        .collect();
    assert_eq!(
        titles,
        [
            "Mean",
            "Median",
            "Mode",
            "Sample variance",
            "Sample standard deviation",
            "Trend line",
            "Coefficient of determination",
        ]
    );
}
