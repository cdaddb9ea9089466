/*!
 * Tests for subtitle processing functionality
 */

use std::fmt::Write;
use gifscribe::subtitle_processor::{SubtitleEntry, SubtitleCollection};
use crate::common;

/// Test timestamp parsing and formatting
#[test]
fn test_timestamp_parsing_withValidTimestamp_shouldParseAndFormat() {
    let ts = "01:23:45,678";
    let ms = SubtitleEntry::parse_timestamp(ts).unwrap();
    assert_eq!(ms, 5025678);

    let formatted = SubtitleEntry::format_timestamp(ms);
    assert_eq!(formatted, ts);
}

#[test]
fn test_timestamp_parsing_withInvalidComponents_shouldFail() {
    assert!(SubtitleEntry::parse_timestamp("00:61:00,000").is_err());
    assert!(SubtitleEntry::parse_timestamp("not a timestamp").is_err());
}

/// Test subtitle entry display formatting
#[test]
fn test_subtitle_entry_display_withValidEntry_shouldFormatCorrectly() {
    let entry = SubtitleEntry::new(1, 5000, 10000, "Test subtitle".to_string());
    let mut output = String::new();
    write!(output, "{}", entry).unwrap();

    assert!(output.contains("1"));
    assert!(output.contains("00:00:05,000"));
    assert!(output.contains("00:00:10,000"));
    assert!(output.contains("Test subtitle"));
}

#[test]
fn test_subtitle_entry_startOffset_shouldUsePeriodDecimal() {
    let entry = SubtitleEntry::new(1, 1500, 4000, "Hello".to_string());
    assert_eq!(entry.start_offset(), "00:00:01.500");
}

#[test]
fn test_subtitle_entry_durationSecs_withOrderedTimes_shouldBePositive() {
    let entry = SubtitleEntry::new(1, 1500, 4000, "Hello".to_string());
    let duration = entry.duration_secs().unwrap();
    assert!((duration - 2.5).abs() < 1e-6);
}

#[test]
fn test_subtitle_entry_durationSecs_withMisorderedTimes_shouldBeNegative() {
    let entry = SubtitleEntry::new(1, 4000, 1500, "Hello".to_string());
    let duration = entry.duration_secs().unwrap();
    assert!(duration < 0.0);
}

/// Test SRT parsing
#[test]
fn test_parse_srt_string_withValidContent_shouldParseAllBlocks() {
    let entries = SubtitleCollection::parse_srt_string(common::sample_srt()).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].seq_num, 1);
    assert_eq!(entries[0].text, "This is a test subtitle.");
    assert_eq!(entries[1].start_time_ms, 5000);
    assert_eq!(entries[1].end_time_ms, 9000);
    assert_eq!(entries[2].seq_num, 3);
    assert_eq!(entries[2].text, "For testing purposes.");
}

#[test]
fn test_parse_srt_string_withMultilineText_shouldJoinLines() {
    let content = "1\n00:00:01,000 --> 00:00:04,000\nLine one\nLine two\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "Line one\nLine two");
}

#[test]
fn test_parse_srt_string_withGappedIndices_shouldRenumberSequentially() {
    let content = "7\n00:00:01,000 --> 00:00:02,000\nFirst.\n\n42\n00:00:03,000 --> 00:00:04,000\nSecond.\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].seq_num, 1);
    assert_eq!(entries[1].seq_num, 2);
}

#[test]
fn test_parse_srt_string_withMisorderedTimestamps_shouldKeepEntry() {
    // Malformed timing is not the parser's call: the entry survives so the
    // clip planner can classify it
    let content = "1\n00:00:05,000 --> 00:00:02,000\nBackwards.\n";
    let entries = SubtitleCollection::parse_srt_string(content).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start_time_ms, 5000);
    assert_eq!(entries[0].end_time_ms, 2000);
}

#[test]
fn test_parse_srt_string_withEmptyContent_shouldFail() {
    assert!(SubtitleCollection::parse_srt_string("").is_err());
    assert!(SubtitleCollection::parse_srt_string("no subtitles here").is_err());
}

/// Round-trip: write a parsed collection and re-parse it
#[test]
fn test_srt_roundTrip_shouldPreserveSegmentCount() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("roundtrip.srt");

    let entries = SubtitleCollection::parse_srt_string(common::sample_srt()).unwrap();
    let original_count = entries.len();

    let collection = SubtitleCollection { entries };
    collection.write_to_srt(&path).unwrap();

    let reparsed = SubtitleCollection::parse_srt_file(&path).unwrap();
    assert_eq!(reparsed.entries.len(), original_count);
    assert_eq!(reparsed.entries[0].text, "This is a test subtitle.");
    assert_eq!(reparsed.entries[2].end_time_ms, 14000);
}
