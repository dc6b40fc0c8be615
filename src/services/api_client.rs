// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP y traduce las fallas
// a la taxonomía de errores del portal.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::models::{
    AuthResponse, CcdOrder, DashboardStats, FivestarOrder, LoginRequest, MessOrder,
    OutingRequest, ServiceKind, ServiceRequest, SignupRequest, StationaryOrder, SubmitPayload,
    Student, XeroxOrder,
};
use crate::utils::constants::{BACKEND_URL, NETWORK_ERROR_MSG};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

/// 401/403 son credenciales; el resto de los non-2xx conservan el mensaje
/// del backend tal cual (o "HTTP n" si no mandó ninguno).
pub(crate) fn classify_http_error(status: u16, backend_message: Option<String>) -> PortalError {
    let message = backend_message.unwrap_or_else(|| format!("HTTP {}", status));
    if status == 401 || status == 403 {
        PortalError::Auth(message)
    } else {
        PortalError::Server(message)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Envelope de los listados: {"requests": [...]} o {"orders": [...]}
#[derive(Deserialize)]
struct ListEnvelope<T> {
    #[serde(default = "Vec::new", alias = "requests", alias = "orders")]
    items: Vec<T>,
}

/// Envelope de los POST: {"request": {...}} o {"order": {...}}
#[derive(Deserialize)]
struct CreateEnvelope<T> {
    #[serde(alias = "request", alias = "order")]
    item: T,
}

/// El payload viaja con el student_id de la sesión inyectado al lado
#[derive(Serialize)]
struct WireBody<'a, B: Serialize> {
    student_id: i64,
    #[serde(flatten)]
    payload: &'a B,
}

fn network_error(context: &str, detail: impl std::fmt::Display) -> PortalError {
    log::error!("❌ {}: {}", context, detail);
    PortalError::Network(NETWORK_ERROR_MSG.to_string())
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    async fn read_error(response: Response) -> PortalError {
        let status = response.status();
        let backend_message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        classify_http_error(status, backend_message)
    }

    async fn parse_auth_response(response: Response) -> Result<Student, PortalError> {
        if !response.ok() {
            return Err(Self::read_error(response).await);
        }
        let body = response
            .json::<AuthResponse>()
            .await
            .map_err(|e| network_error("Respuesta de auth ilegible", e))?;
        body.student
            .ok_or_else(|| network_error("Respuesta de auth sin student", "campo ausente"))
    }

    /// Identidad de la sesión actual (cookie del navegador)
    pub async fn get_me(&self) -> Result<Student, PortalError> {
        let url = format!("{}/api/me", self.base_url);
        let response = Request::get(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| network_error("Error de red en /api/me", e))?;

        if !response.ok() {
            return Err(Self::read_error(response).await);
        }
        response
            .json::<Student>()
            .await
            .map_err(|e| network_error("Respuesta de /api/me ilegible", e))
    }

    pub async fn login(&self, login_id: &str, password: &str) -> Result<Student, PortalError> {
        let url = format!("{}/api/login", self.base_url);
        let body = LoginRequest {
            login_id: login_id.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Iniciando sesión: {}", login_id);

        let response = Request::post(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(&body)
            .map_err(|e| network_error("Error armando login", e))?
            .send()
            .await
            .map_err(|e| network_error("Error de red en login", e))?;

        Self::parse_auth_response(response).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Student, PortalError> {
        let url = format!("{}/api/signup", self.base_url);

        log::info!("📝 Alta de estudiante: {}", request.student_id);

        let response = Request::post(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(request)
            .map_err(|e| network_error("Error armando signup", e))?
            .send()
            .await
            .map_err(|e| network_error("Error de red en signup", e))?;

        Self::parse_auth_response(response).await
    }

    pub async fn demo_login(&self) -> Result<Student, PortalError> {
        let url = format!("{}/api/demo-login", self.base_url);

        let response = Request::post(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| network_error("Error de red en demo-login", e))?;

        Self::parse_auth_response(response).await
    }

    /// Best-effort: el logout local no depende de la respuesta
    pub async fn logout(&self) {
        let url = format!("{}/api/logout", self.base_url);
        match Request::post(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
        {
            Ok(_) => log::info!("👋 Logout notificado al backend"),
            Err(e) => log::warn!("⚠️ Logout sin backend (ignorado): {}", e),
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        kind: ServiceKind,
        student_id: i64,
    ) -> Result<Vec<T>, PortalError> {
        let url = format!(
            "{}/api/{}?student_id={}",
            self.base_url,
            kind.endpoint(),
            student_id
        );
        let response = Request::get(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| network_error("Error de red listando pedidos", e))?;

        if !response.ok() {
            return Err(Self::read_error(response).await);
        }
        let envelope = response
            .json::<ListEnvelope<T>>()
            .await
            .map_err(|e| network_error("Listado de pedidos ilegible", e))?;
        Ok(envelope.items)
    }

    /// Listado de un servicio, etiquetado con su kind de origen
    pub async fn list_requests(
        &self,
        kind: ServiceKind,
        student_id: i64,
    ) -> Result<Vec<ServiceRequest>, PortalError> {
        let tagged = match kind {
            ServiceKind::Outing => self
                .fetch_list::<OutingRequest>(kind, student_id)
                .await?
                .into_iter()
                .map(ServiceRequest::Outing)
                .collect(),
            ServiceKind::Xerox => self
                .fetch_list::<XeroxOrder>(kind, student_id)
                .await?
                .into_iter()
                .map(ServiceRequest::Xerox)
                .collect(),
            ServiceKind::Mess => self
                .fetch_list::<MessOrder>(kind, student_id)
                .await?
                .into_iter()
                .map(ServiceRequest::Mess)
                .collect(),
            ServiceKind::Fivestar => self
                .fetch_list::<FivestarOrder>(kind, student_id)
                .await?
                .into_iter()
                .map(ServiceRequest::Fivestar)
                .collect(),
            ServiceKind::Ccd => self
                .fetch_list::<CcdOrder>(kind, student_id)
                .await?
                .into_iter()
                .map(ServiceRequest::Ccd)
                .collect(),
            ServiceKind::Stationary => self
                .fetch_list::<StationaryOrder>(kind, student_id)
                .await?
                .into_iter()
                .map(ServiceRequest::Stationary)
                .collect(),
        };
        Ok(tagged)
    }

    async fn post_request<B: Serialize, T: DeserializeOwned>(
        &self,
        kind: ServiceKind,
        student_id: i64,
        payload: &B,
    ) -> Result<T, PortalError> {
        let url = format!("{}/api/{}", self.base_url, kind.endpoint());
        let body = WireBody { student_id, payload };

        let response = Request::post(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(&body)
            .map_err(|e| network_error("Error armando el pedido", e))?
            .send()
            .await
            .map_err(|e| network_error("Error de red enviando el pedido", e))?;

        if !response.ok() {
            return Err(Self::read_error(response).await);
        }
        response
            .json::<CreateEnvelope<T>>()
            .await
            .map(|envelope| envelope.item)
            .map_err(|e| network_error("Respuesta del pedido ilegible", e))
    }

    /// POST al endpoint del servicio; devuelve el pedido que el backend creó
    pub async fn create_request(
        &self,
        student_id: i64,
        payload: &SubmitPayload,
    ) -> Result<ServiceRequest, PortalError> {
        let kind = payload.kind();
        log::info!("📤 Enviando pedido de {}", kind.slug());

        match payload {
            SubmitPayload::Outing(p) => self
                .post_request::<_, OutingRequest>(kind, student_id, p)
                .await
                .map(ServiceRequest::Outing),
            SubmitPayload::Xerox(p) => self
                .post_request::<_, XeroxOrder>(kind, student_id, p)
                .await
                .map(ServiceRequest::Xerox),
            SubmitPayload::Mess(p) => self
                .post_request::<_, MessOrder>(kind, student_id, p)
                .await
                .map(ServiceRequest::Mess),
            SubmitPayload::Fivestar(p) => self
                .post_request::<_, FivestarOrder>(kind, student_id, p)
                .await
                .map(ServiceRequest::Fivestar),
            SubmitPayload::Ccd(p) => self
                .post_request::<_, CcdOrder>(kind, student_id, p)
                .await
                .map(ServiceRequest::Ccd),
            SubmitPayload::Stationary(p) => self
                .post_request::<_, StationaryOrder>(kind, student_id, p)
                .await
                .map(ServiceRequest::Stationary),
        }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, PortalError> {
        let url = format!("{}/api/dashboard/stats", self.base_url);
        let response = Request::get(&url)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| network_error("Error de red en stats", e))?;

        if !response.ok() {
            return Err(Self::read_error(response).await);
        }
        response
            .json::<DashboardStats>()
            .await
            .map_err(|e| network_error("Stats ilegibles", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_401_conserva_el_mensaje_del_backend_verbatim() {
        let err = classify_http_error(401, Some("Invalid credentials".to_string()));
        assert_eq!(err, PortalError::Auth("Invalid credentials".to_string()));
    }

    #[test]
    fn non_2xx_sin_cuerpo_usa_el_status() {
        let err = classify_http_error(500, None);
        assert_eq!(err, PortalError::Server("HTTP 500".to_string()));
    }

    #[test]
    fn el_400_de_alta_duplicada_es_error_de_servidor() {
        let err = classify_http_error(400, Some("Student ID already registered".to_string()));
        assert_eq!(
            err,
            PortalError::Server("Student ID already registered".to_string())
        );
    }

    #[test]
    fn el_payload_viaja_con_student_id_inyectado() {
        let payload = crate::models::MessPayload {
            meal_type: "Lunch".to_string(),
            meal_date: "2024-06-11".to_string(),
            quantity: 2,
            special_requests: None,
        };
        let body = WireBody { student_id: 7, payload: &payload };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["student_id"], 7);
        assert_eq!(json["meal_type"], "Lunch");
        assert_eq!(json["quantity"], 2);
    }
}
