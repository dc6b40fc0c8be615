// ============================================================================
// SUBMIT SERVICE - Pipeline de envío, uno solo para los seis servicios
// ============================================================================
// validar -> guard anti-reenvío -> POST -> notificar + publicar.
// Exactamente un desenlace por invocación: Ok(pedido creado) o un error
// reportado; nunca un drop silencioso. Servicios distintos pueden enviar en
// paralelo; el mismo servicio no admite dos envíos en vuelo.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::PortalError;
use crate::models::{ServiceKind, ServiceRequest, SubmitPayload};
use crate::services::backend::RequestBackend;
use crate::services::notify_service::NotificationPort;
use crate::state::reactivity::ReactiveState;
use crate::state::session_store::SessionStore;

#[derive(Clone)]
pub struct SubmitService {
    backend: RequestBackend,
    session: SessionStore,
    relay: Rc<dyn NotificationPort>,
    in_flight: Rc<RefCell<HashSet<ServiceKind>>>,
    /// Último pedido creado con éxito; el feed y las stats se recargan por
    /// suscripción a este slot.
    last_submitted: ReactiveState<Option<ServiceRequest>>,
}

impl SubmitService {
    pub fn new(
        backend: RequestBackend,
        session: SessionStore,
        relay: Rc<dyn NotificationPort>,
    ) -> Self {
        Self {
            backend,
            session,
            relay,
            in_flight: Rc::new(RefCell::new(HashSet::new())),
            last_submitted: ReactiveState::new(None),
        }
    }

    /// Avisar cuando un envío termina bien (refresh de feed/stats)
    pub fn on_submitted<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.last_submitted.subscribe(callback);
    }

    pub fn last_submitted(&self) -> Option<ServiceRequest> {
        self.last_submitted.snapshot()
    }

    fn try_acquire(&self, kind: ServiceKind) -> bool {
        self.in_flight.borrow_mut().insert(kind)
    }

    fn release(&self, kind: ServiceKind) {
        self.in_flight.borrow_mut().remove(&kind);
    }

    pub async fn submit(&self, payload: SubmitPayload) -> Result<ServiceRequest, PortalError> {
        let kind = payload.kind();

        // identidad desde la sesión, nunca desde el formulario
        let student_id = self.session.current().student_id().ok_or_else(|| {
            PortalError::Auth("You must be logged in to place a request".to_string())
        })?;

        // validación local: si falla, no se tocó la red
        payload.validate()?;

        if !self.try_acquire(kind) {
            return Err(PortalError::Validation(format!(
                "A {} is already being submitted",
                kind.label()
            )));
        }

        let result = self.backend.create(student_id, &payload).await;
        self.release(kind);

        match result {
            Ok(request) => {
                log::info!("✅ {} #{} creado", kind.label(), request.id());
                // fire-and-forget: el desenlace del aviso no cambia el nuestro
                self.relay.notify(kind, &request);
                self.last_submitted.set(Some(request.clone()));
                Ok(request)
            }
            Err(e) => {
                log::error!("❌ Envío de {} falló: {}", kind.slug(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessPayload, OutingPayload, Session, Student, XeroxPayload};
    use crate::services::backend::MemoryStore;
    use futures::executor::block_on;

    struct RecordingRelay {
        calls: Rc<RefCell<Vec<ServiceKind>>>,
    }

    impl NotificationPort for RecordingRelay {
        fn notify(&self, kind: ServiceKind, _request: &ServiceRequest) {
            self.calls.borrow_mut().push(kind);
        }
    }

    fn student() -> Student {
        Student {
            id: 7,
            student_id: "21CS001".to_string(),
            name: "Demo Student".to_string(),
            email: "demo@college.edu".to_string(),
            phone: "9876543210".to_string(),
            hostel_room: "A-101".to_string(),
            blood_group: "O+".to_string(),
            emergency_contact: None,
            created_at: None,
        }
    }

    fn pipeline() -> (SubmitService, MemoryStore, Rc<RefCell<Vec<ServiceKind>>>) {
        let store = MemoryStore::new();
        let session = SessionStore::new();
        session.replace(Session::authenticated_as(student()));
        let calls = Rc::new(RefCell::new(Vec::new()));
        let relay = Rc::new(RecordingRelay { calls: calls.clone() });
        let service = SubmitService::new(
            RequestBackend::Memory(store.clone()),
            session,
            relay,
        );
        (service, store, calls)
    }

    fn xerox_payload() -> SubmitPayload {
        SubmitPayload::Xerox(XeroxPayload {
            service_type: "Print".to_string(),
            pages: 10,
            delivery_location: "Hostel A".to_string(),
            instructions: None,
            contact_number: "9000000000".to_string(),
        })
    }

    #[test]
    fn un_envio_exitoso_notifica_exactamente_una_vez() {
        let (service, store, calls) = pipeline();

        let created = block_on(service.submit(xerox_payload())).unwrap();
        assert_eq!(created.kind(), ServiceKind::Xerox);

        // el relay recibió una sola llamada, con el servicio correcto
        assert_eq!(*calls.borrow(), vec![ServiceKind::Xerox]);
        // el slot reactivo publica el pedido creado
        assert_eq!(service.last_submitted(), Some(created.clone()));
        // y el backend lo tiene
        assert_eq!(store.list(ServiceKind::Xerox, 7).unwrap(), vec![created]);
    }

    #[test]
    fn sin_sesion_no_se_envia_nada() {
        let store = MemoryStore::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let relay = Rc::new(RecordingRelay { calls: calls.clone() });
        let service = SubmitService::new(
            RequestBackend::Memory(store.clone()),
            SessionStore::new(),
            relay,
        );

        let err = block_on(service.submit(xerox_payload())).unwrap_err();
        assert!(matches!(err, PortalError::Auth(_)));
        assert!(store.list(ServiceKind::Xerox, 7).unwrap().is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn un_payload_invalido_no_llega_al_backend() {
        let (service, store, calls) = pipeline();

        let bad = SubmitPayload::Outing(OutingPayload {
            outing_date: "2024-06-10".to_string(),
            return_date: "2024-06-05".to_string(), // regreso antes de la salida
            reason: "Home Visit".to_string(),
            details: None,
            emergency_contact: "9123456781".to_string(),
        });
        let err = block_on(service.submit(bad)).unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
        assert!(store.list(ServiceKind::Outing, 7).unwrap().is_empty());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn el_guard_rechaza_un_segundo_envio_del_mismo_servicio() {
        let (service, _store, _calls) = pipeline();

        assert!(service.try_acquire(ServiceKind::Mess));
        // mismo servicio en vuelo: rechazado sin tocar la red
        let err = block_on(service.submit(SubmitPayload::Mess(MessPayload {
            meal_type: "Lunch".to_string(),
            meal_date: "2024-06-11".to_string(),
            quantity: 1,
            special_requests: None,
        })))
        .unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));

        // servicios distintos no se bloquean entre sí
        assert!(block_on(service.submit(xerox_payload())).is_ok());

        service.release(ServiceKind::Mess);
        assert!(service.try_acquire(ServiceKind::Mess));
    }

    #[test]
    fn la_falla_del_backend_libera_el_guard_y_no_notifica() {
        let (service, store, calls) = pipeline();
        store.fail_kind(ServiceKind::Xerox);

        let err = block_on(service.submit(xerox_payload())).unwrap_err();
        assert!(matches!(err, PortalError::Network(_)));
        // sin aviso y sin publicación: el desenlace fue el error reportado
        assert!(calls.borrow().is_empty());
        assert_eq!(service.last_submitted(), None);
        // el guard quedó libre para reintentar a mano
        assert!(service.try_acquire(ServiceKind::Xerox));
    }
}
