// ============================================================================
// PORTAL CONTEXT - Grafo de servicios, inyectado explícitamente en la UI
// ============================================================================
// Nada de globals ambientales: la sesión, el pipeline y el feed viajan en
// este contexto y los componentes los reciben por inyección.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{
    ApiClient, AuthService, FeedService, RequestBackend, SubmitService, WhatsAppRelay,
};
use crate::state::{SessionStore, ToastBus};

#[derive(Clone)]
pub struct Portal {
    pub config: AppConfig,
    pub session: SessionStore,
    pub auth: AuthService,
    pub feed: FeedService,
    pub submit: SubmitService,
    pub toasts: ToastBus,
}

impl PartialEq for Portal {
    fn eq(&self, other: &Self) -> bool {
        // misma sesión compartida => mismo grafo de servicios
        self.session.ptr_eq(&other.session)
    }
}

impl Portal {
    pub fn new(config: AppConfig) -> Self {
        let session = SessionStore::new();
        let client = ApiClient::new();
        let backend = RequestBackend::from_config(&config);

        let auth = AuthService::new(client, session.clone());
        let feed = FeedService::new(backend.clone());
        let submit = SubmitService::new(backend, session.clone(), Rc::new(WhatsAppRelay));

        Self {
            config,
            session,
            auth,
            feed,
            submit,
            toasts: ToastBus::new(),
        }
    }
}
