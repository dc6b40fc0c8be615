// ============================================================================
// ERROR - Taxonomía de errores del portal
// ============================================================================
// Cuatro categorías, todas capturadas en el borde de cada operación y
// mostradas como toast. Display imprime el mensaje tal cual (el texto del
// backend se muestra sin decorar).
// ============================================================================

/// Error de una operación del portal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// Falla de validación local, antes de cualquier llamada de red
    Validation(String),
    /// Credenciales inválidas o sesión no autenticada
    Auth(String),
    /// El backend respondió non-2xx con un mensaje
    Server(String),
    /// El backend no respondió (fetch falló o respuesta ilegible)
    Network(String),
}

impl PortalError {
    /// Mensaje visible para el usuario
    pub fn message(&self) -> &str {
        match self {
            PortalError::Validation(msg)
            | PortalError::Auth(msg)
            | PortalError::Server(msg)
            | PortalError::Network(msg) => msg,
        }
    }
}

impl std::fmt::Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PortalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_muestra_el_mensaje_verbatim() {
        let err = PortalError::Auth("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
