// ============================================================================
// SERVICE REQUESTS - Tipos de pedido y unión etiquetada del feed
// ============================================================================
// Las respuestas del backend NO son auto-descriptivas: cada endpoint de
// listado devuelve registros de su propio tipo, sin campo de servicio. El
// etiquetado con ServiceKind ocurre aquí, al construir ServiceRequest.
// ============================================================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Los seis servicios del portal
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Outing,
    Xerox,
    Mess,
    Fivestar,
    Ccd,
    Stationary,
}

impl ServiceKind {
    /// Orden fijo de agregación del feed
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Outing,
        ServiceKind::Xerox,
        ServiceKind::Mess,
        ServiceKind::Fivestar,
        ServiceKind::Ccd,
        ServiceKind::Stationary,
    ];

    /// Segmento de ruta del API (los pedidos históricos usan "-orders",
    /// las salidas "-requests"; la ortografía "stationary" es la del backend)
    pub fn endpoint(&self) -> &'static str {
        match self {
            ServiceKind::Outing => "outing-requests",
            ServiceKind::Xerox => "xerox-orders",
            ServiceKind::Mess => "mess-orders",
            ServiceKind::Fivestar => "fivestar-orders",
            ServiceKind::Ccd => "ccd-orders",
            ServiceKind::Stationary => "stationary-orders",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ServiceKind::Outing => "outing",
            ServiceKind::Xerox => "xerox",
            ServiceKind::Mess => "mess",
            ServiceKind::Fivestar => "fivestar",
            ServiceKind::Ccd => "ccd",
            ServiceKind::Stationary => "stationary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Outing => "Outing Request",
            ServiceKind::Xerox => "Xerox Order",
            ServiceKind::Mess => "Mess Order",
            ServiceKind::Fivestar => "Five Star Order",
            ServiceKind::Ccd => "CCD Order",
            ServiceKind::Stationary => "Stationary Order",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ServiceKind::Outing => "🚶",
            ServiceKind::Xerox => "🖨️",
            ServiceKind::Mess => "🍽️",
            ServiceKind::Fivestar => "🍕",
            ServiceKind::Ccd => "☕",
            ServiceKind::Stationary => "📝",
        }
    }

    /// Número del destinatario de la notificación externa
    pub fn relay_number(&self) -> &'static str {
        match self {
            ServiceKind::Outing => "+919380126330",     // Security Office
            ServiceKind::Xerox => "+919380126330",      // Xerox Shop
            ServiceKind::Mess => "+919380126330",       // Mess Manager
            ServiceKind::Fivestar => "+919380126330",   // Five Star
            ServiceKind::Ccd => "+919380126330",        // CCD
            ServiceKind::Stationary => "+919380126330", // Stationary Shop
        }
    }
}

/// Estados conocidos; cada servicio usa su propio subconjunto y el backend
/// puede sumar otros, de ahí el catch-all.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Processing,
    Confirmed,
    Preparing,
    Prepared,
    Ready,
    Completed,
    Delivered,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    /// Texto del badge (y clase CSS) en el feed
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Processing => "processing",
            RequestStatus::Confirmed => "confirmed",
            RequestStatus::Preparing => "preparing",
            RequestStatus::Prepared => "prepared",
            RequestStatus::Ready => "ready",
            RequestStatus::Completed => "completed",
            RequestStatus::Delivered => "delivered",
            RequestStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OutingRequest {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub outing_date: String,
    pub return_date: String,
    pub reason: String,
    #[serde(default)]
    pub details: Option<String>,
    pub emergency_contact: String,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub parent_notified: bool,
    #[serde(default)]
    pub security_notified: bool,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct XeroxOrder {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub service_type: String,
    pub pages: u32,
    pub delivery_location: String,
    #[serde(default)]
    pub instructions: Option<String>,
    pub contact_number: String,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessOrder {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub meal_type: String,
    pub meal_date: String,
    pub quantity: u32,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FivestarOrder {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub category: String,
    pub item: String,
    pub quantity: u32,
    pub delivery_option: String,
    #[serde(default)]
    pub instructions: Option<String>,
    pub contact_number: String,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CcdOrder {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub category: String,
    pub item: String,
    pub quantity: u32,
    pub size: String,
    #[serde(default)]
    pub instructions: Option<String>,
    pub contact_number: String,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StationaryOrder {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    pub category: String,
    pub item: String,
    pub quantity: u32,
    pub delivery_option: String,
    #[serde(default)]
    pub instructions: Option<String>,
    pub contact_number: String,
    #[serde(default)]
    pub status: RequestStatus,
    pub created_at: String,
}

/// Un pedido cualquiera, etiquetado con su servicio de origen.
/// Invariante: la variante determina qué campos existen; nunca se mezclan.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(tag = "service", rename_all = "lowercase")]
pub enum ServiceRequest {
    Outing(OutingRequest),
    Xerox(XeroxOrder),
    Mess(MessOrder),
    Fivestar(FivestarOrder),
    Ccd(CcdOrder),
    Stationary(StationaryOrder),
}

impl ServiceRequest {
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceRequest::Outing(_) => ServiceKind::Outing,
            ServiceRequest::Xerox(_) => ServiceKind::Xerox,
            ServiceRequest::Mess(_) => ServiceKind::Mess,
            ServiceRequest::Fivestar(_) => ServiceKind::Fivestar,
            ServiceRequest::Ccd(_) => ServiceKind::Ccd,
            ServiceRequest::Stationary(_) => ServiceKind::Stationary,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ServiceRequest::Outing(r) => r.id,
            ServiceRequest::Xerox(r) => r.id,
            ServiceRequest::Mess(r) => r.id,
            ServiceRequest::Fivestar(r) => r.id,
            ServiceRequest::Ccd(r) => r.id,
            ServiceRequest::Stationary(r) => r.id,
        }
    }

    pub fn student_id(&self) -> i64 {
        match self {
            ServiceRequest::Outing(r) => r.student_id,
            ServiceRequest::Xerox(r) => r.student_id,
            ServiceRequest::Mess(r) => r.student_id,
            ServiceRequest::Fivestar(r) => r.student_id,
            ServiceRequest::Ccd(r) => r.student_id,
            ServiceRequest::Stationary(r) => r.student_id,
        }
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            ServiceRequest::Outing(r) => r.status,
            ServiceRequest::Xerox(r) => r.status,
            ServiceRequest::Mess(r) => r.status,
            ServiceRequest::Fivestar(r) => r.status,
            ServiceRequest::Ccd(r) => r.status,
            ServiceRequest::Stationary(r) => r.status,
        }
    }

    pub fn created_at(&self) -> &str {
        match self {
            ServiceRequest::Outing(r) => &r.created_at,
            ServiceRequest::Xerox(r) => &r.created_at,
            ServiceRequest::Mess(r) => &r.created_at,
            ServiceRequest::Fivestar(r) => &r.created_at,
            ServiceRequest::Ccd(r) => &r.created_at,
            ServiceRequest::Stationary(r) => &r.created_at,
        }
    }

    /// Clave de orden del feed (descendente). Un created_at ilegible ordena
    /// al final, no rompe el feed.
    pub fn sort_key(&self) -> NaiveDateTime {
        parse_created_at(self.created_at()).unwrap_or(NaiveDateTime::MIN)
    }

    /// Línea de detalle del item en el feed
    pub fn summary(&self) -> String {
        match self {
            ServiceRequest::Outing(r) => {
                format!("{} - {}", r.reason, format_date(&r.outing_date))
            }
            ServiceRequest::Xerox(r) => {
                format!("{} pages - {}", r.pages, r.delivery_location)
            }
            ServiceRequest::Mess(r) => format!("{} (Qty: {})", r.meal_type, r.quantity),
            ServiceRequest::Fivestar(r) => format!("{} (Qty: {})", r.item, r.quantity),
            ServiceRequest::Ccd(r) => format!("{} - {}", r.item, r.size),
            ServiceRequest::Stationary(r) => format!("{} (Qty: {})", r.item, r.quantity),
        }
    }

    /// Fecha de creación lista para mostrar
    pub fn created_display(&self) -> String {
        format_date(self.created_at())
    }
}

/// Parsea los timestamps del backend: isoformat naive ("2024-06-10T09:30:00"),
/// RFC 3339, o solo fecha.
pub fn parse_created_at(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "2024-06-10T09:30:00" -> "10 Jun 2024"; si no parsea, devuelve la parte
/// de fecha cruda.
pub fn format_date(raw: &str) -> String {
    match parse_created_at(raw) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => raw.split('T').next().unwrap_or(raw).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn xerox_fixture(id: i64, created_at: &str) -> ServiceRequest {
        ServiceRequest::Xerox(XeroxOrder {
            id,
            student_id: 1,
            student_name: None,
            service_type: "Print".to_string(),
            pages: 12,
            delivery_location: "Hostel A".to_string(),
            instructions: None,
            contact_number: "9000000000".to_string(),
            status: RequestStatus::Pending,
            created_at: created_at.to_string(),
        })
    }

    #[test]
    fn parsea_isoformat_naive_del_backend() {
        let dt = parse_created_at("2024-06-10T09:30:00").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-06-10 09:30");
    }

    #[test]
    fn parsea_isoformat_con_microsegundos() {
        assert!(parse_created_at("2024-06-10T09:30:00.123456").is_some());
    }

    #[test]
    fn timestamp_ilegible_ordena_al_final() {
        let bad = xerox_fixture(1, "???");
        assert_eq!(bad.sort_key(), NaiveDateTime::MIN);
    }

    #[test]
    fn status_desconocido_cae_en_unknown() {
        let status: RequestStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, RequestStatus::Unknown);
    }

    #[test]
    fn listado_del_backend_se_etiqueta_con_su_servicio() {
        let json = r#"{
            "id": 3,
            "student_id": 7,
            "meal_type": "Lunch",
            "meal_date": "2024-06-11",
            "quantity": 2,
            "special_requests": null,
            "status": "confirmed",
            "created_at": "2024-06-10T08:00:00"
        }"#;
        let order: MessOrder = serde_json::from_str(json).unwrap();
        let tagged = ServiceRequest::Mess(order);
        assert_eq!(tagged.kind(), ServiceKind::Mess);
        assert_eq!(tagged.status(), RequestStatus::Confirmed);
        assert_eq!(tagged.summary(), "Lunch (Qty: 2)");
    }

    #[test]
    fn resumen_de_ccd_muestra_item_y_tamano() {
        let order = ServiceRequest::Ccd(CcdOrder {
            id: 1,
            student_id: 1,
            student_name: None,
            category: "Coffee".to_string(),
            item: "Cappuccino".to_string(),
            quantity: 1,
            size: "Medium".to_string(),
            instructions: None,
            contact_number: "9".to_string(),
            status: RequestStatus::Pending,
            created_at: "2024-06-10T08:00:00".to_string(),
        });
        assert_eq!(order.summary(), "Cappuccino - Medium");
    }
}
