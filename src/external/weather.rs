use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity: i64,
    pub wind_speed_ms: f64,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ForecastEntry {
    pub at: String,
    pub temperature_c: f64,
    pub humidity: i64,
    pub rain_mm: f64,
    pub description: String,
}

// Provider payloads (OpenWeather shape); only the fields we surface.
#[derive(Debug, Deserialize)]
struct ProviderCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ProviderMain {
    temp: f64,
    feels_like: f64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct ProviderWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderRain {
    #[serde(rename = "3h", default)]
    three_hours: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderCurrent {
    weather: Vec<ProviderCondition>,
    main: ProviderMain,
    wind: ProviderWind,
}

#[derive(Debug, Deserialize)]
struct ProviderForecastItem {
    dt_txt: String,
    main: ProviderMain,
    weather: Vec<ProviderCondition>,
    rain: Option<ProviderRain>,
}

#[derive(Debug, Deserialize)]
struct ProviderForecast {
    list: Vec<ProviderForecastItem>,
}

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn current(&self, latitude: f64, longitude: f64) -> AppResult<CurrentWeather> {
        let url = format!("{}/weather", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", "pt_br".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Weather provider error: {error_text}"
            )));
        }

        let payload: ProviderCurrent = response.json().await?;
        Ok(CurrentWeather {
            temperature_c: payload.main.temp,
            feels_like_c: payload.main.feels_like,
            humidity: payload.main.humidity,
            wind_speed_ms: payload.wind.speed,
            description: payload
                .weather
                .first()
                .map(|w| w.description.clone())
                .unwrap_or_default(),
        })
    }

    pub async fn forecast(&self, latitude: f64, longitude: f64) -> AppResult<Vec<ForecastEntry>> {
        let url = format!("{}/forecast", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("appid", self.config.api_key.clone()),
                ("units", "metric".to_string()),
                ("lang", "pt_br".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Weather provider error: {error_text}"
            )));
        }

        let payload: ProviderForecast = response.json().await?;
        Ok(payload
            .list
            .into_iter()
            .map(|item| ForecastEntry {
                at: item.dt_txt,
                temperature_c: item.main.temp,
                humidity: item.main.humidity,
                rain_mm: item.rain.map(|r| r.three_hours).unwrap_or(0.0),
                description: item
                    .weather
                    .first()
                    .map(|w| w.description.clone())
                    .unwrap_or_default(),
            })
            .collect())
    }
}
