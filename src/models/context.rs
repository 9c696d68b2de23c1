use serde::{Deserialize, Serialize};

/// Current weather as reported by the context provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Weather {
    /// Temperature in degrees Fahrenheit
    pub temperature: f64,
    /// Free-text condition (e.g. "Clear", "Light rain")
    #[serde(default)]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl Weather {
    pub fn new(temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            condition: condition.into(),
            humidity: None,
        }
    }

    pub fn is_rainy(&self) -> bool {
        self.condition.to_lowercase().contains("rain")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StylePreference {
    Casual,
    Formal,
    Trendy,
    Classic,
}

/// Per-user taste hints carried alongside the context
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StylePreferences {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub favorite_colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preference: Option<StylePreference>,
}

/// Everything the engine knows about the situation an outfit is for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<StylePreferences>,
}

impl RecommendationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    /// The occasion, if one was given and is not blank
    pub fn occasion(&self) -> Option<&str> {
        self.occasion
            .as_deref()
            .map(str::trim)
            .filter(|occasion| !occasion.is_empty())
    }

    pub fn temperature(&self) -> Option<f64> {
        self.weather.as_ref().map(|weather| weather.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_occasion_is_absent() {
        let context = RecommendationContext::new().with_occasion("   ");
        assert_eq!(context.occasion(), None);

        let context = RecommendationContext::new().with_occasion(" Work ");
        assert_eq!(context.occasion(), Some("Work"));
    }

    #[test]
    fn test_rain_detection_is_case_insensitive() {
        assert!(Weather::new(55.0, "Heavy RAIN").is_rainy());
        assert!(!Weather::new(55.0, "Clear").is_rainy());
    }

    #[test]
    fn test_context_deserializes_camel_case() {
        let json = r#"{
            "occasion": "date",
            "weather": {"temperature": 48, "condition": "Rain", "humidity": 80},
            "timeOfDay": "Evening",
            "userPreferences": {"favoriteColors": ["red"], "stylePreference": "Classic"}
        }"#;
        let context: RecommendationContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.occasion(), Some("date"));
        assert_eq!(context.temperature(), Some(48.0));
        assert_eq!(context.time_of_day, Some(TimeOfDay::Evening));
        let prefs = context.user_preferences.unwrap();
        assert_eq!(prefs.favorite_colors, vec!["red".to_string()]);
        assert_eq!(prefs.style_preference, Some(StylePreference::Classic));
    }
}
