use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    pub location_id: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub success: bool,
    pub message: String,
    pub favorited: bool,
}

/// A favorited location as returned by the list endpoint
#[derive(Debug, Serialize)]
pub struct FavoriteLocation {
    pub id: String,
    pub location_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub favorited_at: Option<String>,
}
