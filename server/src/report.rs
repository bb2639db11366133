//! The JSON document served to the display.
//!
//! On success the body is an object mapping each destination to its list of
//! minute strings, in upstream order:
//!
//! ```json
//! {"Daly City": ["Leaving", "12"], "Millbrae": ["7"]}
//! ```
//!
//! Any failure collapses to a single `Error` key carrying readable text.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key used for the error object. The device decodes the same key.
pub const ERROR_KEY: &str = "Error";

/// One destination and its upcoming departures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationEtas {
    pub destination: String,
    pub minutes: Vec<String>,
}

/// What the proxy answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EtdReport {
    Departures(Vec<DestinationEtas>),
    Error(String),
}

impl EtdReport {
    pub fn error(message: impl Into<String>) -> Self { Self::Error(message.into()) }

    pub fn is_error(&self) -> bool { matches!(self, Self::Error(_)) }
}

impl Serialize for EtdReport {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Departures(departures) => {
                let mut map = serializer.serialize_map(Some(departures.len()))?;
                for entry in departures {
                    map.serialize_entry(&entry.destination, &entry.minutes)?;
                }
                map.end()
            }
            Self::Error(message) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ERROR_KEY, message)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_departures_serialize_as_map() {
        let report = EtdReport::Departures(vec![
            DestinationEtas {
                destination: "Daly City".into(),
                minutes: vec!["Leaving".into(), "12".into()],
            },
            DestinationEtas {
                destination: "Millbrae".into(),
                minutes: vec!["7".into()],
            },
        ]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, json!({"Daly City": ["Leaving", "12"], "Millbrae": ["7"]}));
    }

    #[test]
    fn test_departures_keep_upstream_order() {
        let report = EtdReport::Departures(vec![
            DestinationEtas {
                destination: "Richmond".into(),
                minutes: vec!["3".into()],
            },
            DestinationEtas {
                destination: "Antioch".into(),
                minutes: vec!["9".into()],
            },
        ]);

        let text = serde_json::to_string(&report).unwrap();
        assert_eq!(text, r#"{"Richmond":["3"],"Antioch":["9"]}"#);
    }

    #[test]
    fn test_empty_departures_is_empty_object() {
        let text = serde_json::to_string(&EtdReport::Departures(Vec::new())).unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn test_error_has_single_key() {
        let report = EtdReport::error("No station data found");
        assert!(report.is_error());
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({"Error": "No station data found"}));
    }
}
