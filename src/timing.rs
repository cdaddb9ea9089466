use crate::errors::SubtitleError;

// @module: Timestamp arithmetic for subtitle segments

/// Convert an SRT comma-decimal timestamp to period-decimal form.
///
/// SRT writes `00:00:01,500`; ffmpeg seek offsets and the duration
/// arithmetic below both expect `00:00:01.500`.
pub fn to_period_decimal(timestamp: &str) -> String {
    timestamp.replace(',', ".")
}

/// Parse a `HH:MM:SS[.mmm]` timestamp into total seconds.
///
/// The seconds component may carry a decimal fraction. Comma decimals must
/// be converted with [`to_period_decimal`] before calling this.
pub fn parse_timestamp_secs(timestamp: &str) -> Result<f64, SubtitleError> {
    let parts: Vec<&str> = timestamp.split(':').collect();
    if parts.len() != 3 {
        return Err(SubtitleError::InvalidTimestamp(timestamp.to_string()));
    }

    let hours: f64 = parts[0]
        .parse()
        .map_err(|_| SubtitleError::InvalidTimestamp(timestamp.to_string()))?;
    let minutes: f64 = parts[1]
        .parse()
        .map_err(|_| SubtitleError::InvalidTimestamp(timestamp.to_string()))?;
    let seconds: f64 = parts[2]
        .parse()
        .map_err(|_| SubtitleError::InvalidTimestamp(timestamp.to_string()))?;

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Elapsed seconds between two `HH:MM:SS[.mmm]` timestamps.
///
/// No clamping is applied: if `end` precedes `start` the result is
/// negative. Callers must classify non-positive durations as a segment
/// timing error and never hand them to clip extraction.
pub fn duration_between(start: &str, end: &str) -> Result<f64, SubtitleError> {
    let start_secs = parse_timestamp_secs(start)?;
    let end_secs = parse_timestamp_secs(end)?;
    Ok(end_secs - start_secs)
}
