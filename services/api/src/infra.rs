use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use symptom_triage::domains::headache::HeadacheTriageService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared triage service. Construction is cheap and the value is
/// stateless, so one instance backs the whole server.
pub(crate) fn triage_service() -> Arc<HeadacheTriageService> {
    Arc::new(HeadacheTriageService::new())
}
