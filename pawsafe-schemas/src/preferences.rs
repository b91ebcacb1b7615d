//! User display preferences, stored as camelCase JSON

use serde::{Deserialize, Serialize};

use pawsafe_core::{SurfaceType, TemperatureUnit};

use crate::SchemaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub temperature_unit: TemperatureUnit,
    /// Surface preselected when the app opens
    pub default_surface_type: SurfaceType,
    pub notifications_enabled: bool,
    pub location_services_enabled: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Fahrenheit,
            default_surface_type: SurfaceType::Asphalt,
            notifications_enabled: true,
            location_services_enabled: true,
        }
    }
}

impl UserPreferences {
    /// Missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Switch between Celsius and Fahrenheit
    pub fn toggle_unit(&mut self) {
        self.temperature_unit = self.temperature_unit.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let prefs = UserPreferences::from_json("{}").unwrap();
        assert_eq!(prefs, UserPreferences::default());
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(prefs.default_surface_type, SurfaceType::Asphalt);
    }

    #[test]
    fn reads_camel_case() {
        let prefs = UserPreferences::from_json(
            r#"{"temperatureUnit": "celsius", "defaultSurfaceType": "grass",
                "notificationsEnabled": false}"#,
        )
        .unwrap();
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(prefs.default_surface_type, SurfaceType::Grass);
        assert!(!prefs.notifications_enabled);
        assert!(prefs.location_services_enabled);
    }

    #[test]
    fn writes_camel_case() {
        let json = UserPreferences::default().to_json().unwrap();
        assert!(json.contains(r#""temperatureUnit":"fahrenheit""#));
        assert!(json.contains(r#""defaultSurfaceType":"asphalt""#));
    }

    #[test]
    fn unknown_surface_rejected() {
        let result = UserPreferences::from_json(r#"{"defaultSurfaceType": "lava"}"#);
        assert!(matches!(result, Err(SchemaError::Parse(_))));
    }

    #[test]
    fn toggle() {
        let mut prefs = UserPreferences::default();
        prefs.toggle_unit();
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Celsius);
        prefs.toggle_unit();
        assert_eq!(prefs.temperature_unit, TemperatureUnit::Fahrenheit);
    }
}
