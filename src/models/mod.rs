pub mod student;
pub mod auth;
pub mod request;
pub mod payload;
pub mod stats;

pub use student::{Session, Student};
pub use auth::{AuthResponse, LoginRequest, SignupForm, SignupRequest};
pub use request::{
    CcdOrder, FivestarOrder, MessOrder, OutingRequest, RequestStatus, ServiceKind,
    ServiceRequest, StationaryOrder, XeroxOrder,
};
pub use payload::{
    CcdPayload, FivestarPayload, MessPayload, OutingPayload, StationaryPayload, SubmitPayload,
    XeroxPayload,
};
pub use stats::DashboardStats;
