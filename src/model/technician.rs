use serde::Serialize;
use utoipa::ToSchema;
use crate::entity::technician::{Model as TechnicianModel, TechnicianStatus};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianResponse {
    pub id: i32,
    pub name: String,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: TechnicianStatus,
}

impl From<TechnicianModel> for TechnicianResponse {
    fn from(model: TechnicianModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            specialty: model.specialty,
            phone: model.phone,
            email: model.email,
            status: model.status,
        }
    }
}
