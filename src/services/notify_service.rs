// ============================================================================
// NOTIFY SERVICE - Aviso externo de un pedido recién creado
// ============================================================================
// Puro formateo + handoff. Fire-and-forget: el resultado del envío no llega
// al pipeline; si el canal externo falla, el pedido ya quedó creado igual.
// ============================================================================

use crate::models::{ServiceKind, ServiceRequest};

/// Salida de notificaciones del pipeline. Intercambiable: la implementación
/// real abre WhatsApp; las pruebas registran la llamada.
pub trait NotificationPort {
    fn notify(&self, kind: ServiceKind, request: &ServiceRequest);
}

fn opt(value: &Option<String>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "None",
    }
}

/// Plantilla legible por humanos del aviso, una por servicio.
/// Los opcionales ausentes se muestran como el literal "None".
pub fn format_message(request: &ServiceRequest) -> String {
    match request {
        ServiceRequest::Outing(r) => format!(
            "*Outing Request*\n\nDate: {}\nReturn: {}\nReason: {}\nDetails: {}\nEmergency Contact: {}",
            r.outing_date,
            r.return_date,
            r.reason,
            opt(&r.details),
            r.emergency_contact
        ),
        ServiceRequest::Xerox(r) => format!(
            "*Xerox Order*\n\nService: {}\nPages: {}\nDelivery: {}\nInstructions: {}\nContact: {}",
            r.service_type,
            r.pages,
            r.delivery_location,
            opt(&r.instructions),
            r.contact_number
        ),
        ServiceRequest::Mess(r) => format!(
            "*Mess Order*\n\nMeal: {}\nDate: {}\nQuantity: {}\nSpecial Requests: {}",
            r.meal_type,
            r.meal_date,
            r.quantity,
            opt(&r.special_requests)
        ),
        ServiceRequest::Fivestar(r) => format!(
            "*Five Star Order*\n\nCategory: {}\nItem: {}\nQuantity: {}\nDelivery: {}\nInstructions: {}\nContact: {}",
            r.category,
            r.item,
            r.quantity,
            r.delivery_option,
            opt(&r.instructions),
            r.contact_number
        ),
        ServiceRequest::Ccd(r) => format!(
            "*CCD Order*\n\nCategory: {}\nItem: {}\nQuantity: {}\nSize: {}\nInstructions: {}\nContact: {}",
            r.category,
            r.item,
            r.quantity,
            r.size,
            opt(&r.instructions),
            r.contact_number
        ),
        ServiceRequest::Stationary(r) => format!(
            "*Stationary Order*\n\nCategory: {}\nItem: {}\nQuantity: {}\nDelivery: {}\nInstructions: {}\nContact: {}",
            r.category,
            r.item,
            r.quantity,
            r.delivery_option,
            opt(&r.instructions),
            r.contact_number
        ),
    }
}

/// Deep-link de WhatsApp con el mensaje ya URL-encodeado
pub fn deep_link(kind: ServiceKind, request: &ServiceRequest) -> String {
    let number = kind.relay_number().trim_start_matches('+');
    let message = format_message(request);
    let encoded = String::from(js_sys::encode_uri_component(&message));
    format!("https://wa.me/{}?text={}", number, encoded)
}

/// Abre el chat del destinatario del servicio en una pestaña nueva
pub struct WhatsAppRelay;

impl NotificationPort for WhatsAppRelay {
    fn notify(&self, kind: ServiceKind, request: &ServiceRequest) {
        let url = deep_link(kind, request);

        let opened = web_sys::window()
            .and_then(|w| w.open_with_url_and_target(&url, "_blank").ok())
            .flatten();
        match opened {
            Some(_) => log::info!("📨 Notificación de {} enviada a WhatsApp", kind.slug()),
            // el pedido ya está creado; el aviso perdido no es un error del envío
            None => log::warn!("⚠️ No se pudo abrir WhatsApp (popup bloqueado?)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OutingRequest, RequestStatus, XeroxOrder};

    #[test]
    fn los_opcionales_ausentes_se_muestran_como_none() {
        let request = ServiceRequest::Outing(OutingRequest {
            id: 1,
            student_id: 7,
            student_name: None,
            outing_date: "2024-06-10".to_string(),
            return_date: "2024-06-12".to_string(),
            reason: "Home Visit".to_string(),
            details: None,
            emergency_contact: "9123456781".to_string(),
            status: RequestStatus::Pending,
            parent_notified: false,
            security_notified: false,
            created_at: "2024-06-09T10:00:00".to_string(),
        });
        let message = format_message(&request);
        assert!(message.starts_with("*Outing Request*"));
        assert!(message.contains("Details: None"));
        assert!(message.contains("Emergency Contact: 9123456781"));
    }

    #[test]
    fn la_plantilla_de_xerox_lleva_todos_los_campos() {
        let request = ServiceRequest::Xerox(XeroxOrder {
            id: 2,
            student_id: 7,
            student_name: None,
            service_type: "Print".to_string(),
            pages: 25,
            delivery_location: "Hostel A".to_string(),
            instructions: Some("Spiral binding".to_string()),
            contact_number: "9000000000".to_string(),
            status: RequestStatus::Pending,
            created_at: "2024-06-09T10:00:00".to_string(),
        });
        let message = format_message(&request);
        assert!(message.contains("Pages: 25"));
        assert!(message.contains("Instructions: Spiral binding"));
    }
}
