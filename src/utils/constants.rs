/// URL base del backend del portal
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5001 (por defecto, servidor local)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5001",
};

/// Backend de almacenamiento de pedidos: "remote" (API) o "local" (localStorage)
pub const STORAGE_BACKEND: Option<&str> = option_env!("STORAGE_BACKEND");

// Claves de localStorage
pub const STORAGE_KEY_REQUESTS_PREFIX: &str = "collegePortal_requests";
pub const STORAGE_KEY_NEXT_ID: &str = "collegePortal_nextRequestId";

/// Mensaje genérico cuando el backend no responde
pub const NETWORK_ERROR_MSG: &str = "Network error. Please try again.";
