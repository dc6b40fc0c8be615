// ============================================================================
// FEED SERVICE - Agregación de los seis listados en un solo feed
// ============================================================================
// Seis fetches independientes y concurrentes, con barrera: el merge espera a
// los seis (o a su sustituto vacío). Un servicio caído nunca voltea a los
// otros cinco. El filtro por pestaña es post-procesamiento puro; cambiar de
// pestaña no vuelve a tocar la red.
// ============================================================================

use futures::future::join_all;

use crate::models::{DashboardStats, ServiceKind, ServiceRequest};
use crate::services::backend::RequestBackend;

/// Filtro de pestaña del feed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeedFilter {
    All,
    Only(ServiceKind),
}

impl FeedFilter {
    pub fn matches(&self, kind: ServiceKind) -> bool {
        match self {
            FeedFilter::All => true,
            FeedFilter::Only(only) => *only == kind,
        }
    }
}

/// Concatena los lotes por servicio y ordena por fecha de creación
/// descendente. El sort es estable: los empates conservan el orden de
/// respuesta de cada servicio.
pub fn merge_feed(batches: Vec<Vec<ServiceRequest>>) -> Vec<ServiceRequest> {
    let mut feed: Vec<ServiceRequest> = batches.into_iter().flatten().collect();
    feed.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    feed
}

pub fn apply_filter(feed: Vec<ServiceRequest>, filter: FeedFilter) -> Vec<ServiceRequest> {
    match filter {
        FeedFilter::All => feed,
        FeedFilter::Only(_) => feed
            .into_iter()
            .filter(|r| filter.matches(r.kind()))
            .collect(),
    }
}

#[derive(Clone)]
pub struct FeedService {
    backend: RequestBackend,
}

impl FeedService {
    pub fn new(backend: RequestBackend) -> Self {
        Self { backend }
    }

    /// Carga el feed completo del estudiante. Nunca falla: un servicio que no
    /// responde aporta una lista vacía y un warning.
    pub async fn load_feed(&self, student_id: i64, filter: FeedFilter) -> Vec<ServiceRequest> {
        let fetches = ServiceKind::ALL.into_iter().map(|kind| {
            let backend = self.backend.clone();
            async move {
                match backend.list(kind, student_id).await {
                    Ok(items) => items,
                    Err(e) => {
                        log::warn!("⚠️ No se pudo cargar {}: {}", kind.endpoint(), e);
                        Vec::new()
                    }
                }
            }
        });

        // barrera: el merge espera a los seis
        let batches = join_all(fetches).await;
        let feed = apply_filter(merge_feed(batches), filter);
        log::info!("📋 Feed cargado: {} pedidos", feed.len());
        feed
    }

    /// Stats del dashboard, con fallback fijo documentado si el endpoint falla
    pub async fn load_stats(&self) -> DashboardStats {
        match self.backend.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                log::warn!("⚠️ Stats no disponibles, usando placeholder: {}", e);
                DashboardStats::placeholder()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessPayload, OutingPayload, SubmitPayload, XeroxPayload};
    use crate::services::backend::{build_record, MemoryStore};
    use futures::executor::block_on;

    fn outing_payload() -> SubmitPayload {
        SubmitPayload::Outing(OutingPayload {
            outing_date: "2024-06-10".to_string(),
            return_date: "2024-06-12".to_string(),
            reason: "Home Visit".to_string(),
            details: None,
            emergency_contact: "9123456781".to_string(),
        })
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

    fn mess_payload() -> SubmitPayload {
        SubmitPayload::Mess(MessPayload {
            meal_type: "Lunch".to_string(),
            meal_date: "2024-06-11".to_string(),
            quantity: 1,
            special_requests: None,
        })
    }

    fn record(payload: &SubmitPayload, id: i64, created_at: &str) -> ServiceRequest {
        build_record(payload, id, 7, created_at.to_string())
    }

    #[test]
    fn el_merge_ordena_por_fecha_descendente() {
        let batches = vec![
            vec![record(&outing_payload(), 1, "2024-06-01T10:00:00")],
            vec![record(&xerox_payload(), 2, "2024-06-03T10:00:00")],
            vec![record(&mess_payload(), 3, "2024-06-02T10:00:00")],
        ];
        let feed = merge_feed(batches);
        let dates: Vec<_> = feed.iter().map(|r| r.created_at().to_string()).collect();
        assert_eq!(
            dates,
            vec![
                "2024-06-03T10:00:00",
                "2024-06-02T10:00:00",
                "2024-06-01T10:00:00"
            ]
        );
        // propiedad: cada par adyacente decrece o empata
        for pair in feed.windows(2) {
            assert!(pair[0].sort_key() >= pair[1].sort_key());
        }
    }

    #[test]
    fn los_empates_conservan_el_orden_por_servicio() {
        let same = "2024-06-01T10:00:00";
        let batches = vec![
            vec![record(&outing_payload(), 1, same), record(&outing_payload(), 2, same)],
            vec![record(&xerox_payload(), 3, same)],
        ];
        let feed = merge_feed(batches);
        let ids: Vec<_> = feed.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn filtrar_equivale_a_restringir_el_feed_completo() {
        let batches = vec![
            vec![record(&outing_payload(), 1, "2024-06-01T10:00:00")],
            vec![record(&xerox_payload(), 2, "2024-06-03T10:00:00")],
            vec![record(&mess_payload(), 3, "2024-06-02T10:00:00")],
        ];
        let all = merge_feed(batches);

        let only_xerox = apply_filter(all.clone(), FeedFilter::Only(ServiceKind::Xerox));
        let expected: Vec<_> = all
            .iter()
            .filter(|r| r.kind() == ServiceKind::Xerox)
            .cloned()
            .collect();
        assert_eq!(only_xerox, expected);
        assert!(only_xerox.len() <= all.len());
    }

    #[test]
    fn un_servicio_caido_no_voltea_a_los_demas() {
        let store = MemoryStore::new();
        store.seed(record(&outing_payload(), 1, "2024-06-01T10:00:00"));
        store.seed(record(&xerox_payload(), 2, "2024-06-03T10:00:00"));
        store.seed(record(&mess_payload(), 3, "2024-06-02T10:00:00"));
        store.fail_kind(ServiceKind::Fivestar);
        store.fail_kind(ServiceKind::Ccd);
        store.fail_kind(ServiceKind::Stationary);

        let service = FeedService::new(RequestBackend::Memory(store));
        let feed = block_on(service.load_feed(7, FeedFilter::All));

        let kinds: Vec<_> = feed.iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![ServiceKind::Xerox, ServiceKind::Mess, ServiceKind::Outing]
        );
    }

    #[test]
    fn con_todo_caido_el_feed_es_vacio_no_un_error() {
        let store = MemoryStore::new();
        for kind in ServiceKind::ALL {
            store.fail_kind(kind);
        }
        let service = FeedService::new(RequestBackend::Memory(store));
        let feed = block_on(service.load_feed(7, FeedFilter::All));
        assert!(feed.is_empty());
    }

    #[test]
    fn las_stats_cuentan_los_pendientes_por_servicio() {
        let store = MemoryStore::new();
        store.seed(record(&outing_payload(), 1, "2024-06-01T10:00:00"));
        store.seed(record(&xerox_payload(), 2, "2024-06-03T10:00:00"));
        store.seed(record(&xerox_payload(), 3, "2024-06-04T10:00:00"));

        let service = FeedService::new(RequestBackend::Memory(store));
        let stats = block_on(service.load_stats());
        assert_eq!(stats.pending_outings, 1);
        assert_eq!(stats.pending_xerox, 2);
        assert_eq!(stats.pending_mess, 0);
    }
}
