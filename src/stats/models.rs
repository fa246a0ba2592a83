use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct TripSummary {
    pub total_trips: i64,
    pub total_distance: f64,
    pub average_distance: f64,
    pub transport_mode_breakdown: HashMap<String, i64>,
}

/// Carbon totals; `total`/`average` cover the public-transport estimate,
/// the split fields report public and private sums separately.
#[derive(Debug, Serialize)]
pub struct CarbonFootprintSummary {
    pub total_carbon_footprint: f64,
    pub average_carbon_footprint: f64,
    pub carbon_footprint_public: f64,
    pub carbon_footprint_private: f64,
}

#[derive(Debug, Serialize)]
pub struct DestinationCount {
    pub name: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct FrequentDestinations {
    pub top_destinations: Vec<DestinationCount>,
}
