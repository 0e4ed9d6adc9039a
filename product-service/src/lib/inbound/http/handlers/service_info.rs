use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo { service: "product" })
}
