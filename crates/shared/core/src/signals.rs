//! Signal naming conventions

/// Name of the signal covering `block`
///
/// A non-numeric block is already a full signal name and is returned as-is.
/// Numeric blocks are prefixed; signals facing against the track's running
/// direction get an `N` suffix.
pub fn derive_signal_name(
    prefix: &str,
    block: &str,
    track_direction: &str,
    signal_direction: &str,
) -> String {
    if block.parse::<i64>().is_err() {
        return block.to_string();
    }

    if track_direction == signal_direction {
        format!("{}{}", prefix, block)
    } else {
        format!("{}{}N", prefix, block)
    }
}

/// Strip everything from the first `@` (`L5@7129,50.2` -> `L5`)
pub fn signal_base_name(signal_name: &str) -> &str {
    match signal_name.split_once('@') {
        Some((base, _)) => base,
        None => signal_name,
    }
}

/// Returns true if the signal belongs to the station with `station_prefix`
pub fn signal_matches_station(signal_name: &str, station_prefix: &str) -> bool {
    !station_prefix.is_empty() && signal_name.starts_with(station_prefix)
}
