use service::store::UnitOfWork;
use service::Services;

/// Shared handler state. Cloning is cheap: every service holds `Arc`s.
pub struct AppState<S: UnitOfWork> {
    pub services: Services<S>,
}

impl<S: UnitOfWork> AppState<S> {
    pub fn new(services: Services<S>) -> Self { Self { services } }
}

impl<S: UnitOfWork> Clone for AppState<S> {
    fn clone(&self) -> Self { Self { services: self.services.clone() } }
}
