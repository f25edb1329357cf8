use std::sync::Arc;

use crate::models::physician_repository::PhysicianRepository;
use crate::models::specialty_repository::SpecialtyRepository;
use crate::security::auth::Authenticator;
use crate::services::assignment::AssignmentService;
use crate::services::directory::DirectoryService;

/// Application state containing all shared repositories and services
#[derive(Clone)]
pub struct AppState {
    /// Specialty repository for taxonomy CRUD
    pub specialty_repository: Arc<dyn SpecialtyRepository>,
    /// Physician repository for record reads and assignment writes
    pub physician_repository: Arc<dyn PhysicianRepository>,
    /// Assignment service for partition and bulk mutation logic
    pub assignment_service: Arc<dyn AssignmentService>,
    /// Directory service for grouped listings
    pub directory_service: Arc<dyn DirectoryService>,
    /// Authenticator for request nonce validation
    pub authenticator: Arc<dyn Authenticator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("specialty_repository", &"Arc<dyn SpecialtyRepository>")
            .field("physician_repository", &"Arc<dyn PhysicianRepository>")
            .field("assignment_service", &"Arc<dyn AssignmentService>")
            .field("directory_service", &"Arc<dyn DirectoryService>")
            .field("authenticator", &"Arc<dyn Authenticator>")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        specialty_repository: Arc<dyn SpecialtyRepository>,
        physician_repository: Arc<dyn PhysicianRepository>,
        assignment_service: Box<dyn AssignmentService>,
        directory_service: Box<dyn DirectoryService>,
        authenticator: Box<dyn Authenticator>,
    ) -> Self {
        Self {
            specialty_repository,
            physician_repository,
            assignment_service: Arc::from(assignment_service),
            directory_service: Arc::from(directory_service),
            authenticator: Arc::from(authenticator),
        }
    }
}
