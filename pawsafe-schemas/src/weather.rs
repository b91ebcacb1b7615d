//! Weather Provider Payloads
//!
//! Typed models of the two current-weather payloads PawSafe consumes, and
//! their conversion into validated [`AmbientConditions`].
//!
//! | Provider    | Temperature | Wind | Cloud | UV  | Local hour              |
//! |-------------|-------------|------|-------|-----|-------------------------|
//! | OpenWeather | °C (metric) | m/s  | %     | -   | `dt` + `timezone`       |
//! | WeatherAPI  | °C          | km/h | %     | yes | `location.localtime`    |
//!
//! OpenWeather's current-weather endpoint carries no UV index; it is
//! reported as 0, which only removes the UV term from the estimate.

use serde::{Deserialize, Serialize};

use pawsafe_core::{
    constants::weather::MPS_TO_KPH, time::hour_from_unix, AmbientConditions, ConditionsValidator,
    Validator, WeatherProvider,
};

use crate::SchemaError;

/// A provider payload that can be turned into validated conditions
pub trait WeatherObservation {
    /// Conditions in core units, before validation
    fn raw_conditions(&self) -> Result<AmbientConditions, SchemaError>;

    /// Human-readable place name, if the payload carries one
    fn place_name(&self) -> Option<&str>;

    /// Conditions in core units, rejected if implausible
    fn to_conditions(&self) -> Result<AmbientConditions, SchemaError> {
        let conditions = self.raw_conditions()?;
        ConditionsValidator::default().validate(&conditions).map_err(|err| {
            log::warn!(
                "Rejected weather for {}: {}",
                self.place_name().unwrap_or("unknown location"),
                err
            );
            SchemaError::from(err)
        })?;
        Ok(conditions)
    }
}

// ===== OPENWEATHER =====

/// OpenWeather `/data/2.5/weather` response with `units=metric`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherResponse {
    pub main: OpenWeatherMain,
    #[serde(default)]
    pub weather: Vec<OpenWeatherCondition>,
    pub wind: OpenWeatherWind,
    pub clouds: OpenWeatherClouds,
    /// Observation time, Unix seconds
    pub dt: i64,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherMain {
    pub temp: f32,
    #[serde(default)]
    pub feels_like: Option<f32>,
    pub humidity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherCondition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherWind {
    /// Metres per second
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherClouds {
    pub all: f32,
}

impl WeatherObservation for OpenWeatherResponse {
    fn raw_conditions(&self) -> Result<AmbientConditions, SchemaError> {
        Ok(AmbientConditions {
            air_temp: self.main.temp,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed * MPS_TO_KPH,
            uv_index: 0.0,
            cloud_cover: self.clouds.all,
            local_hour: self.timezone.map(|offset| hour_from_unix(self.dt, offset)),
        })
    }

    fn place_name(&self) -> Option<&str> {
        Some(self.name.as_str()).filter(|name| !name.is_empty())
    }
}

impl TryFrom<OpenWeatherResponse> for AmbientConditions {
    type Error = SchemaError;

    fn try_from(response: OpenWeatherResponse) -> Result<Self, Self::Error> {
        response.to_conditions()
    }
}

// ===== WEATHERAPI =====

/// WeatherAPI `/v1/current.json` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiResponse {
    pub location: WeatherApiLocation,
    pub current: WeatherApiCurrent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    /// `YYYY-MM-DD HH:MM` in the location's time zone
    pub localtime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiCurrent {
    pub temp_c: f32,
    #[serde(default)]
    pub temp_f: Option<f32>,
    #[serde(default)]
    pub is_day: Option<u8>,
    #[serde(default)]
    pub condition: Option<WeatherApiCondition>,
    pub wind_kph: f32,
    pub humidity: f32,
    pub cloud: f32,
    #[serde(default)]
    pub feelslike_c: Option<f32>,
    #[serde(default)]
    pub feelslike_f: Option<f32>,
    pub uv: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiCondition {
    pub text: String,
    pub icon: String,
}

impl WeatherObservation for WeatherApiResponse {
    fn raw_conditions(&self) -> Result<AmbientConditions, SchemaError> {
        Ok(AmbientConditions {
            air_temp: self.current.temp_c,
            humidity: self.current.humidity,
            wind_speed: self.current.wind_kph,
            uv_index: self.current.uv,
            cloud_cover: self.current.cloud,
            local_hour: Some(parse_local_hour(&self.location.localtime)?),
        })
    }

    fn place_name(&self) -> Option<&str> {
        Some(self.location.name.as_str()).filter(|name| !name.is_empty())
    }
}

impl TryFrom<WeatherApiResponse> for AmbientConditions {
    type Error = SchemaError;

    fn try_from(response: WeatherApiResponse) -> Result<Self, Self::Error> {
        response.to_conditions()
    }
}

/// Hour from a `YYYY-MM-DD HH:MM` timestamp
pub fn parse_local_hour(localtime: &str) -> Result<u8, SchemaError> {
    let invalid = || SchemaError::InvalidLocalTime(localtime.to_string());

    let time = localtime.split_whitespace().nth(1).ok_or_else(invalid)?;
    let hour = time.split(':').next().ok_or_else(invalid)?;
    let hour: u8 = hour.parse().map_err(|_| invalid())?;

    if hour > 23 {
        return Err(invalid());
    }
    Ok(hour)
}

/// Parse and validate an OpenWeather payload
pub fn parse_openweather(json: &str) -> Result<AmbientConditions, SchemaError> {
    let response: OpenWeatherResponse = serde_json::from_str(json)?;
    response.to_conditions()
}

/// Parse and validate a WeatherAPI payload
pub fn parse_weatherapi(json: &str) -> Result<AmbientConditions, SchemaError> {
    let response: WeatherApiResponse = serde_json::from_str(json)?;
    response.to_conditions()
}

// ===== CACHED PAYLOADS =====

/// Which provider produced a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadFormat {
    OpenWeather,
    WeatherApi,
}

/// Weather provider backed by a payload fetched earlier
///
/// Lets the estimator run against the last response the app received,
/// offline or in tests, through the same validation as a live fetch.
#[derive(Debug, Clone)]
pub struct CachedPayload {
    format: PayloadFormat,
    body: String,
}

impl CachedPayload {
    pub fn new(format: PayloadFormat, body: impl Into<String>) -> Self {
        Self {
            format,
            body: body.into(),
        }
    }

    pub fn format(&self) -> PayloadFormat {
        self.format
    }
}

impl WeatherProvider for CachedPayload {
    type Error = SchemaError;

    fn current_conditions(&self) -> Result<AmbientConditions, Self::Error> {
        match self.format {
            PayloadFormat::OpenWeather => parse_openweather(&self.body),
            PayloadFormat::WeatherApi => parse_weatherapi(&self.body),
        }
    }
}
