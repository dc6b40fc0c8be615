// ============================================================================
// PAYLOADS - Cuerpo tipado de cada formulario de pedido
// ============================================================================
// La capa de UI construye el payload una sola vez y lo entrega entero al
// pipeline; nada del core vuelve a leer el árbol de render. student_id NO
// viaja aquí: lo inyecta el pipeline desde la sesión.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::models::request::ServiceKind;

fn required(value: &str, message: &str) -> Result<(), PortalError> {
    if value.trim().is_empty() {
        Err(PortalError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

fn parse_date(value: &str, message: &str) -> Result<chrono::NaiveDate, PortalError> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| PortalError::Validation(message.to_string()))
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct OutingPayload {
    pub outing_date: String,
    pub return_date: String,
    pub reason: String,
    pub details: Option<String>,
    pub emergency_contact: String,
}

impl OutingPayload {
    pub fn validate(&self) -> Result<(), PortalError> {
        required(&self.reason, "Please select a reason for the outing")?;
        required(&self.emergency_contact, "Please enter an emergency contact")?;
        let outing = parse_date(&self.outing_date, "Please pick a valid outing date")?;
        let ret = parse_date(&self.return_date, "Please pick a valid return date")?;
        if ret < outing {
            return Err(PortalError::Validation(
                "Return date cannot be before the outing date".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct XeroxPayload {
    pub service_type: String,
    pub pages: u32,
    pub delivery_location: String,
    pub instructions: Option<String>,
    pub contact_number: String,
}

impl XeroxPayload {
    pub fn validate(&self) -> Result<(), PortalError> {
        required(&self.service_type, "Please select a service type")?;
        required(&self.delivery_location, "Please select a delivery location")?;
        required(&self.contact_number, "Please enter a contact number")?;
        if self.pages == 0 {
            return Err(PortalError::Validation(
                "Pages must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessPayload {
    pub meal_type: String,
    pub meal_date: String,
    pub quantity: u32,
    pub special_requests: Option<String>,
}

impl MessPayload {
    pub fn validate(&self) -> Result<(), PortalError> {
        required(&self.meal_type, "Please select a meal type")?;
        parse_date(&self.meal_date, "Please pick a valid meal date")?;
        if self.quantity == 0 {
            return Err(PortalError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FivestarPayload {
    pub category: String,
    pub item: String,
    pub quantity: u32,
    pub delivery_option: String,
    pub instructions: Option<String>,
    pub contact_number: String,
}

impl FivestarPayload {
    pub fn validate(&self) -> Result<(), PortalError> {
        required(&self.category, "Please select a category")?;
        required(&self.item, "Please enter an item")?;
        required(&self.delivery_option, "Please select a delivery option")?;
        required(&self.contact_number, "Please enter a contact number")?;
        if self.quantity == 0 {
            return Err(PortalError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CcdPayload {
    pub category: String,
    pub item: String,
    pub quantity: u32,
    pub size: String,
    pub instructions: Option<String>,
    pub contact_number: String,
}

impl CcdPayload {
    pub fn validate(&self) -> Result<(), PortalError> {
        required(&self.category, "Please select a category")?;
        required(&self.item, "Please enter an item")?;
        required(&self.size, "Please select a size")?;
        required(&self.contact_number, "Please enter a contact number")?;
        if self.quantity == 0 {
            return Err(PortalError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StationaryPayload {
    pub category: String,
    pub item: String,
    pub quantity: u32,
    pub delivery_option: String,
    pub instructions: Option<String>,
    pub contact_number: String,
}

impl StationaryPayload {
    pub fn validate(&self) -> Result<(), PortalError> {
        required(&self.category, "Please select a category")?;
        required(&self.item, "Please enter an item")?;
        required(&self.delivery_option, "Please select a delivery option")?;
        required(&self.contact_number, "Please enter a contact number")?;
        if self.quantity == 0 {
            return Err(PortalError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Un payload de cualquier servicio: el pipeline de envío es uno solo,
/// parametrizado por la variante.
#[derive(Clone, PartialEq, Debug)]
pub enum SubmitPayload {
    Outing(OutingPayload),
    Xerox(XeroxPayload),
    Mess(MessPayload),
    Fivestar(FivestarPayload),
    Ccd(CcdPayload),
    Stationary(StationaryPayload),
}

impl SubmitPayload {
    pub fn kind(&self) -> ServiceKind {
        match self {
            SubmitPayload::Outing(_) => ServiceKind::Outing,
            SubmitPayload::Xerox(_) => ServiceKind::Xerox,
            SubmitPayload::Mess(_) => ServiceKind::Mess,
            SubmitPayload::Fivestar(_) => ServiceKind::Fivestar,
            SubmitPayload::Ccd(_) => ServiceKind::Ccd,
            SubmitPayload::Stationary(_) => ServiceKind::Stationary,
        }
    }

    /// Validación local; si falla, el envío no toca la red
    pub fn validate(&self) -> Result<(), PortalError> {
        match self {
            SubmitPayload::Outing(p) => p.validate(),
            SubmitPayload::Xerox(p) => p.validate(),
            SubmitPayload::Mess(p) => p.validate(),
            SubmitPayload::Fivestar(p) => p.validate(),
            SubmitPayload::Ccd(p) => p.validate(),
            SubmitPayload::Stationary(p) => p.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outing(outing_date: &str, return_date: &str) -> OutingPayload {
        OutingPayload {
            outing_date: outing_date.to_string(),
            return_date: return_date.to_string(),
            reason: "Home Visit".to_string(),
            details: None,
            emergency_contact: "9123456781".to_string(),
        }
    }

    #[test]
    fn salida_con_regreso_anterior_se_rechaza_localmente() {
        let err = outing("2024-06-10", "2024-06-05").validate().unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn salida_con_regreso_el_mismo_dia_es_valida() {
        assert!(outing("2024-06-10", "2024-06-10").validate().is_ok());
    }

    #[test]
    fn fecha_malformada_es_error_de_validacion() {
        let err = outing("10/06/2024", "2024-06-12").validate().unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    #[test]
    fn xerox_sin_paginas_se_rechaza() {
        let payload = XeroxPayload {
            service_type: "Print".to_string(),
            pages: 0,
            delivery_location: "Hostel A".to_string(),
            instructions: None,
            contact_number: "9000000000".to_string(),
        };
        assert!(matches!(payload.validate(), Err(PortalError::Validation(_))));
    }

    #[test]
    fn el_payload_conoce_su_servicio() {
        let payload = SubmitPayload::Mess(MessPayload {
            meal_type: "Dinner".to_string(),
            meal_date: "2024-06-11".to_string(),
            quantity: 1,
            special_requests: None,
        });
        assert_eq!(payload.kind(), ServiceKind::Mess);
        assert!(payload.validate().is_ok());
    }
}
