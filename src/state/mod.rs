// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_store;
pub mod toasts;

pub use reactivity::*;
pub use session_store::*;
pub use toasts::*;
