use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::Api;
use crate::auth::SessionStore;
use crate::error::ApiError;
use crate::trip::dto::{TripPlan, TripRequest};

/// Distinguished `error` value stored when the server rejects a generation
/// because the free quota is used up. The UI matches on it exactly to show
/// the upgrade prompt instead of a generic failure.
pub const LIMIT_REACHED: &str = "LIMIT_REACHED";

/// Observable plan state. `plan` and `plans` are replaced wholesale on every
/// successful action; `error` is empty unless the last action failed.
#[derive(Debug, Clone, Default)]
pub struct PlanState {
    pub plan: Option<TripPlan>,
    pub plans: Vec<TripPlan>,
    pub loading: bool,
    pub error: String,
}

/// Owns the current trip plan and the generation/fetch calls that mutate it.
///
/// Every action is gated on an active session, checked through the injected
/// [`SessionStore`] before anything touches the network or the status
/// fields. Only that guard propagates an error to the caller; request
/// failures land in [`PlanState::error`] for the UI to render.
pub struct PlanStore {
    api: Api,
    session: Arc<SessionStore>,
    state: RwLock<PlanState>,
}

impl PlanStore {
    pub fn new(api: Api, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            state: RwLock::new(PlanState::default()),
        }
    }

    pub async fn snapshot(&self) -> PlanState {
        self.state.read().await.clone()
    }

    pub async fn plan(&self) -> Option<TripPlan> {
        self.state.read().await.plan.clone()
    }

    pub async fn plans(&self) -> Vec<TripPlan> {
        self.state.read().await.plans.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> String {
        self.state.read().await.error.clone()
    }

    /// Generates a plan for `request`, replacing any current plan on success.
    pub async fn generate(&self, request: &TripRequest) -> Result<(), ApiError> {
        self.require_session().await?;
        self.begin().await;
        let result = self.api.post::<TripPlan, _>("/v1/trip/plan", request).await;
        self.finish_generation(result).await;
        Ok(())
    }

    /// Forces a fresh generation for `request`, bypassing the server's
    /// same-input reuse. Costs a generation against the quota like
    /// [`generate`](Self::generate); whether a plan already exists is not
    /// checked.
    pub async fn regenerate(&self, request: &TripRequest) -> Result<(), ApiError> {
        self.require_session().await?;
        self.begin().await;
        let result = self
            .api
            .post::<TripPlan, _>("/v1/trip/plan/regenerate", request)
            .await;
        self.finish_generation(result).await;
        Ok(())
    }

    /// Loads a previously generated plan by id.
    pub async fn load_plan(&self, id: &str) -> Result<(), ApiError> {
        self.require_session().await?;
        self.begin().await;
        let result = self.api.get::<TripPlan>(&format!("/v1/trip/plan/{id}")).await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(plan) => {
                debug!(plan_id = %plan.id, "plan loaded");
                state.plan = Some(plan);
            }
            Err(err) => {
                warn!(error = %err, "load plan failed");
                state.error = surface_error(&err, "Not found");
            }
        }
        Ok(())
    }

    /// Fetches all of the signed-in user's plans, replacing `plans` wholesale.
    pub async fn list_plans(&self) -> Result<(), ApiError> {
        self.require_session().await?;
        self.begin().await;
        let result = self.api.get::<Vec<TripPlan>>("/v1/trip/plans").await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(plans) => {
                debug!(count = plans.len(), "plans listed");
                state.plans = plans;
            }
            Err(err) => {
                warn!(error = %err, "list plans failed");
                state.error = surface_error(&err, "Failed");
            }
        }
        Ok(())
    }

    /// Guard shared by every action. Fires before the `loading`/`error`
    /// reset, so an anonymous call leaves the status fields untouched.
    async fn require_session(&self) -> Result<(), ApiError> {
        if self.session.is_authenticated().await {
            Ok(())
        } else {
            Err(ApiError::AuthRequired)
        }
    }

    async fn begin(&self) {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error.clear();
    }

    async fn finish_generation(&self, result: Result<TripPlan, ApiError>) {
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(plan) => {
                debug!(plan_id = %plan.id, "plan stored");
                state.plan = Some(plan);
            }
            Err(err) => {
                warn!(error = %err, "generation failed");
                state.error = generation_error(&err);
            }
        }
    }
}

/// Quota exhaustion maps to the sentinel; everything else is surfaced like
/// any other failure. Applies to the generation endpoints only.
fn generation_error(err: &ApiError) -> String {
    if err.code() == Some("limit_reached") {
        return LIMIT_REACHED.to_string();
    }
    surface_error(err, "Failed")
}

/// Server-provided code or message, verbatim, else the caller's fallback.
fn surface_error(err: &ApiError, fallback: &str) -> String {
    if let ApiError::Status { code, message, .. } = err {
        if let Some(code) = code {
            return code.clone();
        }
        if let Some(message) = message {
            return message.clone();
        }
    }
    fallback.to_string()
}
