use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::models::student::Student;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub login_id: String,
    pub password: String,
}

/// Cuerpo de POST /api/signup, ya validado localmente
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub emergency_contact: String,
    pub hostel_room: String,
    pub blood_group: String,
}

/// Respuesta de login/signup/demo-login: 200 trae student, 4xx trae error
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Datos crudos del formulario de alta, antes de validar.
/// El nombre viaja partido en dos campos en el formulario y junto en el wire.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: String,
    pub hostel_room: String,
    pub blood_group: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Validación local previa a cualquier llamada de red.
    /// Si falla, el alta no genera tráfico.
    pub fn validate(&self) -> Result<SignupRequest, PortalError> {
        if self.password != self.confirm_password {
            return Err(PortalError::Validation("Passwords do not match".to_string()));
        }

        if self.password.len() < 6 {
            return Err(PortalError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let required = [
            (&self.first_name, "first name"),
            (&self.student_id, "student ID"),
            (&self.email, "email"),
            (&self.phone, "phone"),
            (&self.emergency_contact, "emergency contact"),
            (&self.hostel_room, "hostel room"),
            (&self.blood_group, "blood group"),
        ];
        for (value, label) in required {
            if value.trim().is_empty() {
                return Err(PortalError::Validation(format!("Please enter your {}", label)));
            }
        }

        let name = if self.last_name.trim().is_empty() {
            self.first_name.trim().to_string()
        } else {
            format!("{} {}", self.first_name.trim(), self.last_name.trim())
        };

        Ok(SignupRequest {
            name,
            student_id: self.student_id.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
            emergency_contact: self.emergency_contact.trim().to_string(),
            hostel_room: self.hostel_room.trim().to_string(),
            blood_group: self.blood_group.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            first_name: "Asha".to_string(),
            last_name: "Patel".to_string(),
            student_id: "21CS042".to_string(),
            email: "asha@college.edu".to_string(),
            phone: "9123456780".to_string(),
            emergency_contact: "9123456781".to_string(),
            hostel_room: "C-310".to_string(),
            blood_group: "B+".to_string(),
            password: "secret9".to_string(),
            confirm_password: "secret9".to_string(),
        }
    }

    #[test]
    fn alta_valida_produce_el_request() {
        let request = valid_form().validate().unwrap();
        assert_eq!(request.name, "Asha Patel");
        assert_eq!(request.student_id, "21CS042");
    }

    #[test]
    fn passwords_distintas_fallan_sin_red() {
        let mut form = valid_form();
        form.confirm_password = "otra".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, PortalError::Validation("Passwords do not match".to_string()));
    }

    #[test]
    fn password_corta_falla() {
        let mut form = valid_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();
        assert!(matches!(form.validate(), Err(PortalError::Validation(_))));
    }

    #[test]
    fn campos_obligatorios_vacios_fallan() {
        let mut form = valid_form();
        form.student_id = "  ".to_string();
        assert!(matches!(form.validate(), Err(PortalError::Validation(_))));
    }
}
