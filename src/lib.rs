//! The Grand Reserve hotel website - Library exports for testing
//!

pub mod api;
pub mod core;
pub mod infrastructure;

use crate::api::templates::PageRenderer;
use crate::core::auth::SessionAdminGate;
use crate::core::cache::InMemoryPageCache;
use crate::core::services::DefaultBookingService;
use crate::core::settings::Settings;
use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::repositories::DbBookingRepository;
use di::{Injectable, ServiceCollection};

/// Services of the site, shared by the binary and the tests.
pub fn services() -> ServiceCollection {
    let mut services = ServiceCollection::new();
    services
        .add(Settings::singleton())
        .add(DatabaseConnection::singleton())
        .add(InMemoryPageCache::singleton())
        .add(SessionAdminGate::singleton())
        .add(PageRenderer::singleton())
        .add(DbBookingRepository::scoped())
        .add(DefaultBookingService::scoped());
    services
}
