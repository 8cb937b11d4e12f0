//! Client library for the trip-planner HTTP API.
//!
//! Two state containers back the UI: [`auth::SessionStore`] owns the
//! authenticated user and [`trip::PlanStore`] owns the current trip plan.
//! Both talk to the API through the typed [`api::Api`] accessor; the session
//! credential is a server-managed cookie carried by the transport.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod trip;

pub use api::{Api, HttpTransport, Transport};
pub use auth::{SessionStore, User};
pub use config::AppConfig;
pub use error::ApiError;
pub use trip::{Budget, Pace, PlanStore, TripPlan, TripRequest, LIMIT_REACHED};
