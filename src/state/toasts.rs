// ============================================================================
// TOASTS - Cola reactiva de notificaciones transitorias
// ============================================================================

use crate::state::reactivity::ReactiveState;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Todos los errores del portal terminan acá, convertidos en un aviso
/// transitorio; nada se propaga al event loop.
#[derive(Clone)]
pub struct ToastBus {
    toasts: ReactiveState<Vec<Toast>>,
    next_id: Rc<Cell<u32>>,
}

impl ToastBus {
    pub fn new() -> Self {
        Self {
            toasts: ReactiveState::new(Vec::new()),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let toast = Toast { id, kind, message: message.into() };
        self.toasts.update(|list| list.push(toast));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Info, message)
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn current(&self) -> Vec<Toast> {
        self.toasts.snapshot()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.toasts.subscribe(callback);
    }
}

impl Default for ToastBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_y_dismiss() {
        let bus = ToastBus::new();
        let a = bus.success("Login successful!");
        let b = bus.error("Invalid credentials");
        assert_eq!(bus.current().len(), 2);

        bus.dismiss(a);
        let rest = bus.current();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id, b);
        assert_eq!(rest[0].kind, ToastKind::Error);
    }
}
