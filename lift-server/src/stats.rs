//! Derived statistics over a disruption list.
//!
//! Everything here is a pure function of the fetched payload. The
//! scheduler computes stats once per state transition and publishes
//! them alongside the feed state, so consumers never recount.

use std::collections::HashMap;

use crate::tfl::Disruption;

/// Number of disruptions shown in the dashboard preview.
pub const PREVIEW_LEN: usize = 3;

/// Summary statistics for a disruption list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedStats {
    /// Total number of disruptions in the list.
    pub total: usize,
    /// Number of distinct station names across the list.
    pub unique_stations: usize,
    /// Disruption count per station name. An absent name groups under
    /// the empty string.
    pub station_frequency: HashMap<String, usize>,
    /// The first [`PREVIEW_LEN`] disruptions, in feed order.
    pub preview: Vec<Disruption>,
}

/// Compute summary statistics for a disruption list.
///
/// The preview keeps the first [`PREVIEW_LEN`] entries in feed order.
/// The frequency map counts disruptions per station name, so a station
/// with several broken lifts appears once with a higher count.
pub fn derive_stats(disruptions: &[Disruption]) -> DerivedStats {
    let mut station_frequency: HashMap<String, usize> = HashMap::new();
    for disruption in disruptions {
        *station_frequency
            .entry(disruption.stop_point_name.clone())
            .or_insert(0) += 1;
    }

    DerivedStats {
        total: disruptions.len(),
        unique_stations: station_frequency.len(),
        station_frequency,
        preview: disruptions.iter().take(PREVIEW_LEN).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disruption(station: &str) -> Disruption {
        Disruption {
            stop_point_name: station.to_string(),
            message: format!("Lift out of service at {}", station),
            naptan_code: String::new(),
            outage_start_area: "Street".to_string(),
            outage_end_area: "Platform".to_string(),
        }
    }

    #[test]
    fn empty_list_yields_zeroed_stats() {
        let stats = derive_stats(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.unique_stations, 0);
        assert!(stats.station_frequency.is_empty());
        assert!(stats.preview.is_empty());
    }

    #[test]
    fn preview_is_first_three_in_feed_order() {
        let disruptions = vec![
            disruption("Station A"),
            disruption("Station B"),
            disruption("Station A"),
            disruption("Station B"),
        ];

        let stats = derive_stats(&disruptions);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.unique_stations, 2);
        assert_eq!(stats.preview, disruptions[..3]);
    }

    #[test]
    fn preview_shorter_than_limit_keeps_everything() {
        let disruptions = vec![disruption("Station A"), disruption("Station B")];

        let stats = derive_stats(&disruptions);

        assert_eq!(stats.preview, disruptions);
    }

    #[test]
    fn frequency_counts_repeat_stations() {
        let disruptions = vec![
            disruption("Station 1"),
            disruption("Station 2"),
            disruption("Station 1"),
        ];

        let stats = derive_stats(&disruptions);

        assert_eq!(stats.station_frequency.len(), 2);
        assert_eq!(stats.station_frequency["Station 1"], 2);
        assert_eq!(stats.station_frequency["Station 2"], 1);
    }

    #[test]
    fn distinct_stations_count_individually() {
        let disruptions = vec![
            disruption("Station 1"),
            disruption("Station 2"),
            disruption("Station 3"),
        ];

        let stats = derive_stats(&disruptions);

        assert_eq!(stats.unique_stations, stats.total);
    }

    #[test]
    fn missing_station_name_is_its_own_key() {
        let disruptions = vec![disruption(""), disruption(""), disruption("Station 1")];

        let stats = derive_stats(&disruptions);

        assert_eq!(stats.unique_stations, 2);
        assert_eq!(stats.station_frequency[""], 2);
    }
}
