//! Parse-and-validate step between an untyped JSON body and the generator.

use serde_json::Value;

use horror_engine::schema::request::{
    HorrorStoryRequest, Style, DEFAULT_DURATION_SECONDS, DEFAULT_INTENSITY, DEFAULT_THEME,
    MAX_INTENSITY, MIN_INTENSITY,
};

/// The request body as sent. Every field is optional and loosely typed;
/// [`RawStoryRequest::normalize`] turns it into a valid request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStoryRequest {
    pub theme: Option<Value>,
    pub intensity: Option<Value>,
    pub duration: Option<Value>,
    pub style: Option<Value>,
}

impl RawStoryRequest {
    /// Parse a request body. Malformed JSON is an error; well-formed JSON
    /// that is not an object is treated as an empty request. Numbers beyond
    /// `f64` range are kept and later fall back to defaults.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;
        let Value::Object(mut fields) = value else {
            return Ok(Self::default());
        };
        Ok(Self {
            theme: fields.remove("theme"),
            intensity: fields.remove("intensity"),
            duration: fields.remove("duration"),
            style: fields.remove("style"),
        })
    }

    /// Apply defaults and clamping, producing a typed request.
    pub fn normalize(&self) -> HorrorStoryRequest {
        HorrorStoryRequest::new(
            &self.theme(),
            self.intensity(),
            self.duration(),
            self.style(),
        )
    }

    fn theme(&self) -> String {
        match &self.theme {
            None | Some(Value::Null) => DEFAULT_THEME.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Zero counts as unset; any other finite number is clamped and rounded.
    fn intensity(&self) -> u8 {
        let Some(level) = self.intensity.as_ref().and_then(Value::as_f64) else {
            return DEFAULT_INTENSITY;
        };
        if !level.is_finite() || level == 0.0 {
            return DEFAULT_INTENSITY;
        }
        level
            .clamp(f64::from(MIN_INTENSITY), f64::from(MAX_INTENSITY))
            .round() as u8
    }

    fn duration(&self) -> f64 {
        self.duration
            .as_ref()
            .and_then(Value::as_f64)
            .filter(|d| d.is_finite())
            .unwrap_or(DEFAULT_DURATION_SECONDS)
    }

    fn style(&self) -> Style {
        self.style
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|tag| tag.parse::<Style>().ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn normalize(value: Value) -> HorrorStoryRequest {
        let body = serde_json::to_vec(&value).unwrap();
        RawStoryRequest::from_json(&body).unwrap().normalize()
    }

    #[test]
    fn empty_object_gets_every_default() {
        let req = normalize(json!({}));
        assert_eq!(req, HorrorStoryRequest::default());
    }

    #[test]
    fn blank_fields_fall_back() {
        let req = normalize(json!({
            "theme": "",
            "intensity": 0,
            "duration": 500,
            "style": "unknown"
        }));
        assert_eq!(req.theme, "forbidden signal");
        assert_eq!(req.intensity, 3);
        assert_eq!(req.duration, 500.0);
        assert_eq!(req.style, Style::Supernatural);
    }

    #[test]
    fn intensity_is_clamped_and_rounded() {
        assert_eq!(normalize(json!({ "intensity": 9 })).intensity, 5);
        assert_eq!(normalize(json!({ "intensity": -4 })).intensity, 1);
        assert_eq!(normalize(json!({ "intensity": 2.6 })).intensity, 3);
        assert_eq!(normalize(json!({ "intensity": 0.4 })).intensity, 1);
        assert_eq!(normalize(json!({ "intensity": "4" })).intensity, 3);
    }

    #[test]
    fn non_numeric_duration_defaults() {
        assert_eq!(normalize(json!({ "duration": "long" })).duration, 75.0);
        assert_eq!(normalize(json!({ "duration": null })).duration, 75.0);
        assert_eq!(normalize(json!({ "duration": 12 })).duration, 12.0);
    }

    #[test]
    fn theme_is_stringified_and_truncated() {
        assert_eq!(normalize(json!({ "theme": 42 })).theme, "42");
        assert_eq!(normalize(json!({ "theme": null })).theme, "forbidden signal");
        let long = "x".repeat(200);
        assert_eq!(normalize(json!({ "theme": long })).theme.len(), 80);
    }

    #[test]
    fn known_styles_pass_through() {
        assert_eq!(
            normalize(json!({ "style": "found-footage" })).style,
            Style::FoundFootage
        );
        assert_eq!(
            normalize(json!({ "style": "psychological" })).style,
            Style::Psychological
        );
        assert_eq!(normalize(json!({ "style": 3 })).style, Style::Supernatural);
    }

    #[test]
    fn non_object_json_is_an_empty_request() {
        assert_eq!(normalize(json!(null)), HorrorStoryRequest::default());
        assert_eq!(normalize(json!([1, 2, 3])), HorrorStoryRequest::default());
    }

    #[test]
    fn overflowing_numbers_fall_back_to_defaults() {
        let raw = RawStoryRequest::from_json(br#"{"duration": 1e400, "intensity": -1e400}"#)
            .unwrap();
        let req = raw.normalize();
        assert_eq!(req.duration, 75.0);
        assert_eq!(req.intensity, 3);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = RawStoryRequest::from_json(br#"{"style": "psychological", "mood": "grim"}"#)
            .unwrap();
        assert_eq!(raw.normalize().style, Style::Psychological);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(RawStoryRequest::from_json(b"{\"theme\": ").is_err());
        assert!(RawStoryRequest::from_json(b"").is_err());
    }
}
