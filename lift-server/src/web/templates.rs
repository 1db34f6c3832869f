//! Askama templates for the dashboard frontend.

use std::collections::HashMap;

use askama::Template;
use chrono::Local;

use crate::feed::{FeedSnapshot, FeedState};
use crate::tfl::Disruption;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Dashboard page: status tile, statistics tile and station chart.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    /// What the status tile shows.
    pub status: StatusView,

    /// Total number of disruptions.
    pub total: usize,

    /// Number of distinct stations with at least one disruption.
    pub affected_stations: usize,

    /// Per-station bars, widest first.
    pub chart: Vec<ChartBarView>,

    /// Local wall-clock time of the last successful fetch.
    pub updated_at: Option<String>,
}

impl DashboardTemplate {
    /// Build the page view from a published feed snapshot.
    pub fn from_snapshot(snapshot: &FeedSnapshot) -> Self {
        let status = match &snapshot.state {
            FeedState::Loading => StatusView::Loading,
            FeedState::Error(message) => StatusView::Error(message.clone()),
            FeedState::Ready(_) if snapshot.stats.total == 0 => StatusView::Empty,
            FeedState::Ready(_) => StatusView::Preview(
                snapshot
                    .stats
                    .preview
                    .iter()
                    .map(DisruptionView::from_disruption)
                    .collect(),
            ),
        };

        Self {
            status,
            total: snapshot.stats.total,
            affected_stations: snapshot.stats.unique_stations,
            chart: ChartBarView::from_frequency(&snapshot.stats.station_frequency),
            updated_at: snapshot
                .fetched_at
                .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string()),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Content of the "Current Lift Status" tile.
#[derive(Debug, Clone)]
pub enum StatusView {
    /// A fetch is in flight.
    Loading,

    /// The last fetch failed; holds the user-facing message.
    Error(String),

    /// The last fetch succeeded and found no disruptions.
    Empty,

    /// The last fetch succeeded; holds the preview rows.
    Preview(Vec<DisruptionView>),
}

/// One disruption row in the status tile.
#[derive(Debug, Clone)]
pub struct DisruptionView {
    pub station: String,
    pub message: String,
    pub outage_start: String,
    pub outage_end: String,
}

impl DisruptionView {
    /// Create from a feed disruption.
    pub fn from_disruption(disruption: &Disruption) -> Self {
        Self {
            station: disruption.stop_point_name.clone(),
            message: disruption.message.clone(),
            outage_start: disruption.outage_start_area.clone(),
            outage_end: disruption.outage_end_area.clone(),
        }
    }

    /// Whether either end of the outage is described.
    pub fn has_outage(&self) -> bool {
        !self.outage_start.is_empty() || !self.outage_end.is_empty()
    }

    /// Outage location for display, e.g. "Street to Ticket hall".
    pub fn outage_summary(&self) -> String {
        match (self.outage_start.is_empty(), self.outage_end.is_empty()) {
            (false, false) => format!("{} to {}", self.outage_start, self.outage_end),
            (false, true) => self.outage_start.clone(),
            (true, false) => self.outage_end.clone(),
            (true, true) => String::new(),
        }
    }
}

/// One bar in the station chart.
#[derive(Debug, Clone)]
pub struct ChartBarView {
    pub station: String,
    pub count: usize,
    /// Bar width as a percentage of the busiest station's count.
    pub width_pct: usize,
}

impl ChartBarView {
    /// Build bars from the station frequency map.
    ///
    /// Bars are sorted by count descending, then by station name so
    /// equal counts render in a stable order.
    pub fn from_frequency(frequency: &HashMap<String, usize>) -> Vec<Self> {
        let max = frequency.values().copied().max().unwrap_or(0);

        let mut bars: Vec<Self> = frequency
            .iter()
            .map(|(station, &count)| Self {
                station: station.clone(),
                count,
                width_pct: count * 100 / max.max(1),
            })
            .collect();

        bars.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.station.cmp(&b.station))
        });

        bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disruption(station: &str, message: &str) -> Disruption {
        Disruption {
            stop_point_name: station.to_string(),
            message: message.to_string(),
            naptan_code: "940GZZLU".to_string(),
            outage_start_area: "Street".to_string(),
            outage_end_area: "Platform".to_string(),
        }
    }

    #[test]
    fn loading_snapshot_renders_loading_message() {
        let template = DashboardTemplate::from_snapshot(&FeedSnapshot::loading());
        let html = template.render().unwrap();

        assert!(html.contains("TfL Lift Disruptions Dashboard"));
        assert!(html.contains("Current Lift Status"));
        assert!(html.contains("Loading lift disruption data..."));
        assert!(html.contains("No data available"));
    }

    #[test]
    fn error_snapshot_renders_error_message() {
        let template =
            DashboardTemplate::from_snapshot(&FeedSnapshot::error("Failed to fetch data"));
        let html = template.render().unwrap();

        assert!(html.contains("Error: Failed to fetch data"));
        assert!(html.contains("No data available"));
    }

    #[test]
    fn empty_payload_renders_no_disruptions_message() {
        let template = DashboardTemplate::from_snapshot(&FeedSnapshot::ready(Vec::new()));
        let html = template.render().unwrap();

        assert!(html.contains("No lift disruptions reported"));
        assert!(html.contains("Total Disruptions"));
        assert!(html.contains("Affected Stations"));
        assert!(html.contains("No data available"));
    }

    #[test]
    fn preview_renders_first_three_messages_only() {
        let payload = vec![
            disruption("Station 1", "Message 1"),
            disruption("Station 2", "Message 2"),
            disruption("Station 3", "Message 3"),
            disruption("Station 4", "Message 4"),
        ];
        let template = DashboardTemplate::from_snapshot(&FeedSnapshot::ready(payload));
        let html = template.render().unwrap();

        assert!(html.contains("Message 1"));
        assert!(html.contains("Message 2"));
        assert!(html.contains("Message 3"));
        assert!(!html.contains("Message 4"));
        // The chart still covers every station.
        assert!(html.contains("Station 4"));
        assert!(html.contains("Updated at"));
    }

    #[test]
    fn status_view_tracks_feed_state() {
        let loading = DashboardTemplate::from_snapshot(&FeedSnapshot::loading());
        assert!(matches!(loading.status, StatusView::Loading));

        let empty = DashboardTemplate::from_snapshot(&FeedSnapshot::ready(Vec::new()));
        assert!(matches!(empty.status, StatusView::Empty));

        let ready = DashboardTemplate::from_snapshot(&FeedSnapshot::ready(vec![disruption(
            "Station 1",
            "Message 1",
        )]));
        let StatusView::Preview(rows) = &ready.status else {
            panic!("expected a preview");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station, "Station 1");
        assert_eq!(ready.total, 1);
        assert_eq!(ready.affected_stations, 1);
    }

    #[test]
    fn chart_bars_sorted_widest_first() {
        let mut frequency = HashMap::new();
        frequency.insert("Station 1".to_string(), 2);
        frequency.insert("Station 2".to_string(), 1);

        let bars = ChartBarView::from_frequency(&frequency);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].station, "Station 1");
        assert_eq!(bars[0].width_pct, 100);
        assert_eq!(bars[1].station, "Station 2");
        assert_eq!(bars[1].width_pct, 50);
    }

    #[test]
    fn chart_bars_tie_break_by_name() {
        let mut frequency = HashMap::new();
        frequency.insert("Vauxhall".to_string(), 1);
        frequency.insert("Bank".to_string(), 1);

        let bars = ChartBarView::from_frequency(&frequency);

        assert_eq!(bars[0].station, "Bank");
        assert_eq!(bars[1].station, "Vauxhall");
        assert_eq!(bars[0].width_pct, 100);
        assert_eq!(bars[1].width_pct, 100);
    }

    #[test]
    fn chart_bars_empty_frequency() {
        let bars = ChartBarView::from_frequency(&HashMap::new());
        assert!(bars.is_empty());
    }

    #[test]
    fn outage_summary_handles_missing_areas() {
        let mut view = DisruptionView {
            station: "Station 1".to_string(),
            message: "Message 1".to_string(),
            outage_start: "Street".to_string(),
            outage_end: "Ticket hall".to_string(),
        };
        assert!(view.has_outage());
        assert_eq!(view.outage_summary(), "Street to Ticket hall");

        view.outage_end = String::new();
        assert_eq!(view.outage_summary(), "Street");

        view.outage_start = String::new();
        assert!(!view.has_outage());
        assert_eq!(view.outage_summary(), "");
    }
}
