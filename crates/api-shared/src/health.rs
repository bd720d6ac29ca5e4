use crate::HealthRes;

/// Simple health service used by the REST API and by clients probing it.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static health check; the service holds no state worth inspecting.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Recipe API is alive".into(),
        }
    }
}
