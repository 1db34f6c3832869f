//! TfL lift disruptions dashboard server.
//!
//! Polls the Transport for London lift disruption feed every five
//! minutes and serves a dashboard summarising which station lifts are
//! out of service right now.

pub mod feed;
pub mod stats;
pub mod tfl;
pub mod web;
