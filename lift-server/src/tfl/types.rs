//! TfL lift-disruption feed DTOs.
//!
//! These types map directly to the JSON served by the Lift Disruptions v2
//! endpoint. Every field defaults to the empty string because the feed omits
//! fields rather than sending nulls; a record with a missing station name is
//! still a record, keyed under `""`.

use serde::{Deserialize, Serialize};

/// One reported lift outage from the disruption feed.
///
/// Records carry no stable identifier; identity is positional within a fetch
/// batch, and two identical records are two outages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    /// Human-readable name of the affected station.
    #[serde(default)]
    pub stop_point_name: String,

    /// Free-text description of the outage shown to passengers.
    #[serde(default)]
    pub message: String,

    /// NaPTAN code of the stop point.
    #[serde(default)]
    pub naptan_code: String,

    /// Area the broken lift serves at the start of the route through the station.
    #[serde(default)]
    pub outage_start_area: String,

    /// Area the broken lift serves at the end of the route through the station.
    #[serde(default)]
    pub outage_end_area: String,
}
