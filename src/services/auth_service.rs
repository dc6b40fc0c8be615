// ============================================================================
// AUTH SERVICE - Transiciones de sesión contra el backend
// ============================================================================
// Toda transición reemplaza la sesión entera en el SessionStore. En fallas
// de login/signup la sesión queda intacta; en check_session la falla de red
// cierra la sesión (fail-closed).
// ============================================================================

use crate::error::PortalError;
use crate::models::{Session, SignupForm, Student};
use crate::services::api_client::ApiClient;
use crate::state::session_store::SessionStore;

/// Resultado de la verificación de identidad. Nunca es un error: sin
/// respuesta del backend, la sesión se considera cerrada.
#[derive(Clone, PartialEq, Debug)]
pub enum SessionCheck {
    Authenticated(Student),
    Unauthenticated,
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Consulta /api/me y alinea el SessionStore con la respuesta.
    /// Idempotente: sin login/logout de por medio, repetirla da lo mismo.
    pub async fn check_session(&self) -> SessionCheck {
        let outcome = match self.client.get_me().await {
            Ok(student) => SessionCheck::Authenticated(student),
            Err(e) => {
                log::info!("🔒 Sin sesión activa: {}", e);
                SessionCheck::Unauthenticated
            }
        };

        match &outcome {
            SessionCheck::Authenticated(student) => self
                .session
                .replace(Session::authenticated_as(student.clone())),
            SessionCheck::Unauthenticated => self.session.replace(Session::anonymous()),
        }
        outcome
    }

    pub async fn login(&self, login_id: &str, password: &str) -> Result<Student, PortalError> {
        if login_id.trim().is_empty() || password.is_empty() {
            return Err(PortalError::Validation(
                "Please enter both ID and password".to_string(),
            ));
        }

        // en caso de Err la sesión no se toca
        let student = self.client.login(login_id, password).await?;
        self.session
            .replace(Session::authenticated_as(student.clone()));
        log::info!("✅ Sesión iniciada: {}", student.name);
        Ok(student)
    }

    /// Valida localmente ANTES de cualquier llamada de red: un formulario
    /// inválido no genera tráfico.
    pub async fn signup(&self, form: &SignupForm) -> Result<Student, PortalError> {
        let request = form.validate()?;

        let student = self.client.signup(&request).await?;
        self.session
            .replace(Session::authenticated_as(student.clone()));
        log::info!("✅ Cuenta creada: {}", student.student_id);
        Ok(student)
    }

    pub async fn demo_login(&self) -> Result<Student, PortalError> {
        let student = self.client.demo_login().await?;
        self.session
            .replace(Session::authenticated_as(student.clone()));
        log::info!("✅ Demo login: {}", student.name);
        Ok(student)
    }

    /// El aviso al backend es best-effort; la sesión local se cierra siempre
    pub async fn logout(&self) {
        self.client.logout().await;
        self.session.replace(Session::anonymous());
        log::info!("👋 Sesión cerrada");
    }
}
