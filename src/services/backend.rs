// ============================================================================
// REQUEST BACKEND - Dónde viven los pedidos (API remota o navegador)
// ============================================================================
// Un solo pipeline de envío y un solo agregador, parametrizados por este
// backend. La selección es por configuración, no por mantener dos caminos
// de código paralelos.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{AppConfig, StorageBackend};
use crate::error::PortalError;
use crate::models::{
    CcdOrder, DashboardStats, FivestarOrder, MessOrder, OutingRequest, RequestStatus,
    ServiceKind, ServiceRequest, StationaryOrder, SubmitPayload, XeroxOrder,
};
use crate::services::api_client::ApiClient;
use crate::utils::constants::{STORAGE_KEY_NEXT_ID, STORAGE_KEY_REQUESTS_PREFIX};
use crate::utils::storage::{load_from_storage, save_to_storage};

#[derive(Clone)]
pub enum RequestBackend {
    /// API HTTP del portal
    Remote(ApiClient),
    /// localStorage del navegador, sin servidor
    Local(LocalStore),
    /// En memoria (demos y pruebas)
    Memory(MemoryStore),
}

impl RequestBackend {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.storage_backend {
            StorageBackend::Remote => RequestBackend::Remote(ApiClient::new()),
            StorageBackend::Local => RequestBackend::Local(LocalStore::new()),
            StorageBackend::Memory => RequestBackend::Memory(MemoryStore::new()),
        }
    }

    pub async fn list(
        &self,
        kind: ServiceKind,
        student_id: i64,
    ) -> Result<Vec<ServiceRequest>, PortalError> {
        match self {
            RequestBackend::Remote(client) => client.list_requests(kind, student_id).await,
            RequestBackend::Local(store) => store.list(kind, student_id),
            RequestBackend::Memory(store) => store.list(kind, student_id),
        }
    }

    pub async fn create(
        &self,
        student_id: i64,
        payload: &SubmitPayload,
    ) -> Result<ServiceRequest, PortalError> {
        match self {
            RequestBackend::Remote(client) => client.create_request(student_id, payload).await,
            RequestBackend::Local(store) => store.create(student_id, payload),
            RequestBackend::Memory(store) => store.create(student_id, payload),
        }
    }

    pub async fn stats(&self) -> Result<DashboardStats, PortalError> {
        match self {
            RequestBackend::Remote(client) => client.get_stats().await,
            RequestBackend::Local(store) => Ok(store.stats()),
            RequestBackend::Memory(store) => Ok(store.stats()),
        }
    }
}

fn now_isoformat() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Arma el registro recién creado cuando el que asigna id/estado/fecha somos
/// nosotros y no el backend (backends local y memoria).
pub fn build_record(
    payload: &SubmitPayload,
    id: i64,
    student_id: i64,
    created_at: String,
) -> ServiceRequest {
    match payload {
        SubmitPayload::Outing(p) => ServiceRequest::Outing(OutingRequest {
            id,
            student_id,
            student_name: None,
            outing_date: p.outing_date.clone(),
            return_date: p.return_date.clone(),
            reason: p.reason.clone(),
            details: p.details.clone(),
            emergency_contact: p.emergency_contact.clone(),
            status: RequestStatus::Pending,
            parent_notified: false,
            security_notified: false,
            created_at,
        }),
        SubmitPayload::Xerox(p) => ServiceRequest::Xerox(XeroxOrder {
            id,
            student_id,
            student_name: None,
            service_type: p.service_type.clone(),
            pages: p.pages,
            delivery_location: p.delivery_location.clone(),
            instructions: p.instructions.clone(),
            contact_number: p.contact_number.clone(),
            status: RequestStatus::Pending,
            created_at,
        }),
        SubmitPayload::Mess(p) => ServiceRequest::Mess(MessOrder {
            id,
            student_id,
            student_name: None,
            meal_type: p.meal_type.clone(),
            meal_date: p.meal_date.clone(),
            quantity: p.quantity,
            special_requests: p.special_requests.clone(),
            status: RequestStatus::Pending,
            created_at,
        }),
        SubmitPayload::Fivestar(p) => ServiceRequest::Fivestar(FivestarOrder {
            id,
            student_id,
            student_name: None,
            category: p.category.clone(),
            item: p.item.clone(),
            quantity: p.quantity,
            delivery_option: p.delivery_option.clone(),
            instructions: p.instructions.clone(),
            contact_number: p.contact_number.clone(),
            status: RequestStatus::Pending,
            created_at,
        }),
        SubmitPayload::Ccd(p) => ServiceRequest::Ccd(CcdOrder {
            id,
            student_id,
            student_name: None,
            category: p.category.clone(),
            item: p.item.clone(),
            quantity: p.quantity,
            size: p.size.clone(),
            instructions: p.instructions.clone(),
            contact_number: p.contact_number.clone(),
            status: RequestStatus::Pending,
            created_at,
        }),
        SubmitPayload::Stationary(p) => ServiceRequest::Stationary(StationaryOrder {
            id,
            student_id,
            student_name: None,
            category: p.category.clone(),
            item: p.item.clone(),
            quantity: p.quantity,
            delivery_option: p.delivery_option.clone(),
            instructions: p.instructions.clone(),
            contact_number: p.contact_number.clone(),
            status: RequestStatus::Pending,
            created_at,
        }),
    }
}

fn pending_stats<'a, I: Iterator<Item = &'a ServiceRequest>>(requests: I, total_students: u32) -> DashboardStats {
    let mut stats = DashboardStats {
        total_students,
        ..DashboardStats::default()
    };
    for request in requests {
        if request.status() != RequestStatus::Pending {
            continue;
        }
        match request.kind() {
            ServiceKind::Outing => stats.pending_outings += 1,
            ServiceKind::Xerox => stats.pending_xerox += 1,
            ServiceKind::Mess => stats.pending_mess += 1,
            ServiceKind::Fivestar => stats.pending_fivestar += 1,
            ServiceKind::Ccd => stats.pending_ccd += 1,
            ServiceKind::Stationary => stats.pending_stationary += 1,
        }
    }
    stats
}

/// Pedidos persistidos en localStorage, una clave por servicio
#[derive(Clone)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage_key(kind: ServiceKind) -> String {
        format!("{}_{}", STORAGE_KEY_REQUESTS_PREFIX, kind.slug())
    }

    fn load_kind(kind: ServiceKind) -> Vec<ServiceRequest> {
        load_from_storage::<Vec<ServiceRequest>>(&Self::storage_key(kind)).unwrap_or_default()
    }

    fn next_id() -> i64 {
        load_from_storage::<i64>(STORAGE_KEY_NEXT_ID).unwrap_or(0) + 1
    }

    pub fn list(
        &self,
        kind: ServiceKind,
        student_id: i64,
    ) -> Result<Vec<ServiceRequest>, PortalError> {
        let requests = Self::load_kind(kind)
            .into_iter()
            .filter(|r| r.student_id() == student_id)
            .collect();
        Ok(requests)
    }

    pub fn create(
        &self,
        student_id: i64,
        payload: &SubmitPayload,
    ) -> Result<ServiceRequest, PortalError> {
        let kind = payload.kind();
        let id = Self::next_id();
        let record = build_record(payload, id, student_id, now_isoformat());

        let mut requests = Self::load_kind(kind);
        requests.push(record.clone());
        save_to_storage(&Self::storage_key(kind), &requests).map_err(PortalError::Server)?;
        save_to_storage(STORAGE_KEY_NEXT_ID, &id).map_err(PortalError::Server)?;

        log::info!("💾 Pedido #{} de {} guardado en localStorage", id, kind.slug());
        Ok(record)
    }

    pub fn stats(&self) -> DashboardStats {
        let all: Vec<ServiceRequest> = ServiceKind::ALL
            .into_iter()
            .flat_map(Self::load_kind)
            .collect();
        pending_stats(all.iter(), 1)
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Pedidos en memoria; se pierden al recargar la página
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<HashMap<ServiceKind, Vec<ServiceRequest>>>>,
    next_id: Rc<Cell<i64>>,
    #[cfg(test)]
    failing: Rc<RefCell<std::collections::HashSet<ServiceKind>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(
        &self,
        kind: ServiceKind,
        student_id: i64,
    ) -> Result<Vec<ServiceRequest>, PortalError> {
        #[cfg(test)]
        if self.failing.borrow().contains(&kind) {
            return Err(PortalError::Network("backend unavailable".to_string()));
        }

        let requests = self
            .records
            .borrow()
            .get(&kind)
            .map(|list| {
                list.iter()
                    .filter(|r| r.student_id() == student_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(requests)
    }

    pub fn create(
        &self,
        student_id: i64,
        payload: &SubmitPayload,
    ) -> Result<ServiceRequest, PortalError> {
        let kind = payload.kind();

        #[cfg(test)]
        if self.failing.borrow().contains(&kind) {
            return Err(PortalError::Network("backend unavailable".to_string()));
        }

        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let record = build_record(payload, id, student_id, now_isoformat());
        self.records
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    pub fn stats(&self) -> DashboardStats {
        let records = self.records.borrow();
        pending_stats(records.values().flatten(), 1)
    }

    /// Precargar un registro ya etiquetado (demos)
    pub fn seed(&self, request: ServiceRequest) {
        self.records
            .borrow_mut()
            .entry(request.kind())
            .or_default()
            .push(request);
    }

    /// Simular la caída del backend para un servicio
    #[cfg(test)]
    pub fn fail_kind(&self, kind: ServiceKind) {
        self.failing.borrow_mut().insert(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessPayload;

    fn mess_payload() -> SubmitPayload {
        SubmitPayload::Mess(MessPayload {
            meal_type: "Lunch".to_string(),
            meal_date: "2024-06-11".to_string(),
            quantity: 2,
            special_requests: None,
        })
    }

    #[test]
    fn el_registro_nuevo_nace_pendiente_y_con_id() {
        let record = build_record(&mess_payload(), 9, 7, "2024-06-10T08:00:00".to_string());
        assert_eq!(record.id(), 9);
        assert_eq!(record.student_id(), 7);
        assert_eq!(record.status(), RequestStatus::Pending);
        assert_eq!(record.kind(), ServiceKind::Mess);
    }

    #[test]
    fn memoria_crea_lista_y_cuenta_pendientes() {
        let store = MemoryStore::new();
        let created = store.create(7, &mess_payload()).unwrap();
        let listed = store.list(ServiceKind::Mess, 7).unwrap();
        assert_eq!(listed, vec![created]);

        // pedidos de otro estudiante no aparecen
        assert!(store.list(ServiceKind::Mess, 8).unwrap().is_empty());

        let stats = store.stats();
        assert_eq!(stats.pending_mess, 1);
        assert_eq!(stats.pending_xerox, 0);
    }

    #[test]
    fn los_ids_de_memoria_son_crecientes() {
        let store = MemoryStore::new();
        let a = store.create(7, &mess_payload()).unwrap();
        let b = store.create(7, &mess_payload()).unwrap();
        assert!(b.id() > a.id());
    }
}
