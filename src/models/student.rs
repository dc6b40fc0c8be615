use serde::{Deserialize, Serialize};

/// Snapshot del estudiante autenticado, tal como lo devuelve el backend.
/// El backend es autoritativo; nunca se edita localmente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Student {
    /// Id numérico interno (clave de los pedidos)
    pub id: i64,
    /// Matrícula visible (ej. "21CS001"), también sirve de login
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hostel_room: String,
    pub blood_group: String,
    /// No viene en /api/me ni en login; solo en el alta
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Sesión del navegador: quién está actuando, o nadie.
/// Se reemplaza entera en cada transición, nunca se muta campo a campo.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Session {
    pub student: Option<Student>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { student: None }
    }

    pub fn authenticated_as(student: Student) -> Self {
        Self { student: Some(student) }
    }

    pub fn authenticated(&self) -> bool {
        self.student.is_some()
    }

    /// Id numérico que delimita las consultas de pedidos
    pub fn student_id(&self) -> Option<i64> {
        self.student.as_ref().map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_student() -> Student {
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

    #[test]
    fn sesion_anonima_no_esta_autenticada() {
        let session = Session::anonymous();
        assert!(!session.authenticated());
        assert_eq!(session.student_id(), None);
    }

    #[test]
    fn sesion_autenticada_expone_el_id_numerico() {
        let session = Session::authenticated_as(demo_student());
        assert!(session.authenticated());
        assert_eq!(session.student_id(), Some(7));
    }

    #[test]
    fn student_se_deserializa_sin_emergency_contact() {
        // /api/me no incluye emergency_contact ni created_at
        let json = r#"{
            "id": 1,
            "student_id": "21CS002",
            "name": "Jane Roe",
            "email": "jane@college.edu",
            "phone": "9000000000",
            "hostel_room": "B-204",
            "blood_group": "A+"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.emergency_contact, None);
        assert_eq!(student.student_id, "21CS002");
    }
}
