//! Admin password gate with in-memory sessions.

use crate::core::settings::Settings;
use crate::core::traits::AdminGate;
use di::{Ref, inject, injectable};
use log::{info, warn};
use std::collections::HashSet;
use std::sync::RwLock;
use uuid::Uuid;

pub struct SessionAdminGate {
    password: String,
    sessions: RwLock<HashSet<Uuid>>,
}

#[injectable(AdminGate)]
impl SessionAdminGate {
    #[inject]
    pub fn create(settings: Ref<Settings>) -> SessionAdminGate {
        SessionAdminGate::new(settings.admin_password.clone())
    }
}

impl SessionAdminGate {
    pub fn new(password: impl Into<String>) -> SessionAdminGate {
        SessionAdminGate {
            password: password.into(),
            sessions: RwLock::new(HashSet::new()),
        }
    }
}

impl AdminGate for SessionAdminGate {
    fn login(&self, password: &str) -> Option<Uuid> {
        if password != self.password {
            warn!("rejected admin login");
            return None;
        }

        let session = Uuid::new_v4();
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(session);
        info!("admin session opened");

        Some(session)
    }

    fn is_authorized(&self, session: Uuid) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&session)
    }

    fn logout(&self, session: Uuid) {
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&session);
    }
}
