mod dto;
mod store;

pub use dto::{Budget, Pace, TripPlan, TripRequest};
pub use store::{PlanState, PlanStore, LIMIT_REACHED};
