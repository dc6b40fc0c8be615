// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Box<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones.
/// Los clones comparten valor Y suscriptores: una notificación emitida desde
/// cualquier clon llega a todos los suscriptores registrados.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar el valor entero y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar con closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios. No suscribirse desde dentro de una
    /// notificación: el vector de suscriptores está prestado durante notify.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Identidad del estado compartido (para PartialEq de contextos)
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.value, &other.value)
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Copia del valor actual
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifica_a_los_suscriptores() {
        let state = ReactiveState::new(0u32);
        let seen = Rc::new(RefCell::new(0u32));

        let seen_clone = seen.clone();
        state.subscribe(move || {
            *seen_clone.borrow_mut() += 1;
        });

        state.set(1);
        state.set(2);
        assert_eq!(*seen.borrow(), 2);
        assert_eq!(state.snapshot(), 2);
    }

    #[test]
    fn los_clones_comparten_valor_y_suscriptores() {
        let state = ReactiveState::new("a".to_string());
        let clone = state.clone();

        let seen = Rc::new(RefCell::new(0u32));
        let seen_clone = seen.clone();
        // suscripto en el original, notificado desde el clon
        state.subscribe(move || {
            *seen_clone.borrow_mut() += 1;
        });

        clone.set("b".to_string());
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(state.snapshot(), "b");
        assert!(state.ptr_eq(&clone));
    }
}
