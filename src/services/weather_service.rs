use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;
use crate::external::weather::{CurrentWeather, ForecastEntry};
use crate::models::FarmResponse;
use crate::services::FarmService;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct FarmWeatherResponse {
    pub farm: FarmResponse,
    pub current: CurrentWeather,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FarmForecastResponse {
    pub farm: FarmResponse,
    pub forecast: Vec<ForecastEntry>,
}

#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    farm_service: FarmService,
}

impl WeatherService {
    pub fn new(client: WeatherClient, farm_service: FarmService) -> Self {
        Self {
            client,
            farm_service,
        }
    }

    async fn require_active_farm(&self, user_id: i64) -> AppResult<FarmResponse> {
        self.farm_service
            .active_farm(user_id)
            .await?
            .map(FarmResponse::from)
            .ok_or_else(|| {
                AppError::NotFound(
                    "Nenhuma fazenda ativa cadastrada. Cadastre uma fazenda para ver o clima."
                        .to_string(),
                )
            })
    }

    pub async fn current(&self, user_id: i64) -> AppResult<FarmWeatherResponse> {
        let farm = self.require_active_farm(user_id).await?;
        let current = self.client.current(farm.latitude, farm.longitude).await?;
        Ok(FarmWeatherResponse { farm, current })
    }

    pub async fn forecast(&self, user_id: i64) -> AppResult<FarmForecastResponse> {
        let farm = self.require_active_farm(user_id).await?;
        let forecast = self.client.forecast(farm.latitude, farm.longitude).await?;
        Ok(FarmForecastResponse { farm, forecast })
    }
}
