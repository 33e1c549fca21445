use crate::entities::farm_entity as farms;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFarmRequest {
    #[schema(example = "Sítio Boa Vista")]
    pub name: String,
    #[schema(example = "Ribeirão Preto")]
    pub city: String,
    #[schema(example = "SP")]
    pub state: String,
    #[schema(example = -21.17)]
    pub latitude: f64,
    #[schema(example = -47.81)]
    pub longitude: f64,
    #[schema(example = "soja")]
    pub crop: String,
    pub area_hectares: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateFarmRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub crop: Option<String>,
    pub area_hectares: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FarmResponse {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub crop: String,
    pub area_hectares: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<farms::Model> for FarmResponse {
    fn from(farm: farms::Model) -> Self {
        Self {
            id: farm.id,
            name: farm.name,
            city: farm.city,
            state: farm.state,
            latitude: farm.latitude,
            longitude: farm.longitude,
            crop: farm.crop,
            area_hectares: farm.area_hectares,
            is_active: farm.is_active,
            created_at: farm.created_at,
        }
    }
}
