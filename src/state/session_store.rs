// ============================================================================
// SESSION STORE - Única fuente de verdad de "quién está actuando"
// ============================================================================
// La sesión se reemplaza entera en cada transición (login, logout, check);
// nadie fuera de los servicios de auth la muta. Las vistas y el feed la
// observan por suscripción, no por lecturas globales.
// ============================================================================

use crate::models::{Session, Student};
use crate::state::reactivity::ReactiveState;

#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(Session::anonymous()),
        }
    }

    /// Snapshot de la sesión actual
    pub fn current(&self) -> Session {
        self.state.snapshot()
    }

    /// Reemplazo atómico + notificación a los observadores
    pub fn replace(&self, session: Session) {
        self.state.set(session);
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().authenticated()
    }

    pub fn student(&self) -> Option<Student> {
        self.current().student
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn student() -> Student {
        Student {
            id: 1,
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
    fn login_y_logout_reemplazan_la_sesion_entera() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());

        store.replace(Session::authenticated_as(student()));
        assert!(store.is_authenticated());
        assert_eq!(store.current().student_id(), Some(1));

        store.replace(Session::anonymous());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn las_transiciones_notifican_a_los_observadores() {
        let store = SessionStore::new();
        let notified = Rc::new(RefCell::new(0u32));

        let notified_clone = notified.clone();
        store.subscribe(move || {
            *notified_clone.borrow_mut() += 1;
        });

        store.replace(Session::authenticated_as(student()));
        store.replace(Session::anonymous());
        assert_eq!(*notified.borrow(), 2);
    }
}
