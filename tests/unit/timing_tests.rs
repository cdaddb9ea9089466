/*!
 * Tests for timestamp arithmetic
 */

use gifscribe::timing::{duration_between, parse_timestamp_secs, to_period_decimal};

#[test]
fn test_duration_between_withFractionalSeconds_shouldReturnExactDifference() {
    let duration = duration_between("00:00:01.500", "00:00:04.000").unwrap();
    assert!((duration - 2.5).abs() < 1e-6);
}

#[test]
fn test_duration_between_withWholeComponents_shouldUseComponentArithmetic() {
    // 01:02:03 -> 02:04:06 is exactly 1h 2m 3s
    let duration = duration_between("01:02:03", "02:04:06").unwrap();
    let expected = 3600.0 + 2.0 * 60.0 + 3.0;
    assert!((duration - expected).abs() < 1e-6);
}

#[test]
fn test_duration_between_withEqualTimestamps_shouldReturnZero() {
    let duration = duration_between("00:10:00.000", "00:10:00.000").unwrap();
    assert!(duration.abs() < 1e-6);
}

#[test]
fn test_duration_between_withEndBeforeStart_shouldReturnNegative() {
    // No clamping: misordered entries surface as negative durations
    let duration = duration_between("00:00:05.000", "00:00:02.000").unwrap();
    assert!(duration < 0.0);
    assert!((duration + 3.0).abs() < 1e-6);
}

#[test]
fn test_parse_timestamp_secs_withMillis_shouldIncludeFraction() {
    let secs = parse_timestamp_secs("01:23:45.678").unwrap();
    let expected = 3600.0 + 23.0 * 60.0 + 45.678;
    assert!((secs - expected).abs() < 1e-6);
}

#[test]
fn test_parse_timestamp_secs_withMissingComponent_shouldFail() {
    assert!(parse_timestamp_secs("12:34").is_err());
}

#[test]
fn test_parse_timestamp_secs_withGarbage_shouldFail() {
    assert!(parse_timestamp_secs("aa:bb:cc").is_err());
}

#[test]
fn test_parse_timestamp_secs_withCommaDecimal_shouldFail() {
    // SRT comma decimals must be converted before arithmetic
    assert!(parse_timestamp_secs("00:00:01,500").is_err());
}

#[test]
fn test_to_period_decimal_withCommaTimestamp_shouldConvert() {
    assert_eq!(to_period_decimal("00:00:01,500"), "00:00:01.500");
}

#[test]
fn test_to_period_decimal_roundTripWithDurationBetween_shouldWork() {
    let start = to_period_decimal("00:00:01,500");
    let end = to_period_decimal("00:00:04,000");
    let duration = duration_between(&start, &end).unwrap();
    assert!((duration - 2.5).abs() < 1e-6);
}
