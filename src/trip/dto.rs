use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Spending level for a trip. The server defaults to `Mid` when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Mid,
    High,
}

/// Sightseeing tempo. The server defaults to `Balanced` when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Chill,
    Balanced,
    Fast,
}

/// Input parameters for a plan generation. Built by the UI, sent on the
/// wire, never persisted by this layer. Unset optionals are omitted from
/// the JSON body so the server applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub destination: String,
    /// YYYY-MM-DD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<Pace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TripRequest {
    /// Minimal request with every optional left to the server's defaults.
    pub fn new(destination: impl Into<String>, days: u32) -> Self {
        Self {
            destination: destination.into(),
            start_date: None,
            days,
            budget: None,
            interests: None,
            pace: None,
            notes: None,
        }
    }
}

/// A generated itinerary as returned by the planning API. The itinerary and
/// its weather/places context are opaque to this layer; the UI renders them
/// directly. Timestamps are unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: String,
    pub input_hash: String,
    pub request: TripRequest,
    pub itinerary: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub places: Option<Value>,
    pub created_at: i64,
    pub updated_at: i64,
}
