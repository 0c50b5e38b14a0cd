use serde::{Deserialize, Serialize};
use std::fmt;

/// A piece of text ready to classify: trimmed and known non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims `raw` and returns `None` when nothing is left, so empty input
    /// never reaches the wire.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Class identifier as the backend reports it: a small integer when the
/// stored label parses as one, otherwise the raw string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One decoded `/predict` response body. Variant order matters: a body
/// carrying an `error` field is a rejection even if label fields are also
/// present. Extra fields (`details`) are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Rejected {
        error: String,
    },
    Label {
        category: String,
        predicted_class: ClassId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_query_trims_whitespace() {
        let query = Query::parse("  NASA launches a satellite.  ").unwrap();
        assert_eq!(query.text(), "NASA launches a satellite.");
    }

    #[test]
    fn test_query_rejects_empty_and_whitespace() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   ").is_none());
        assert!(Query::parse("\t\n").is_none());
    }

    #[test]
    fn test_predict_request_wire_shape() {
        let request = PredictRequest { text: "some news" };
        let serialized = serde_json::to_value(&request).unwrap();
        assert_eq!(serialized, json!({"text": "some news"}));
    }

    #[test]
    fn test_class_id_from_integer() {
        let id: ClassId = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(id, ClassId::Int(3));
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn test_class_id_from_string() {
        let id: ClassId = serde_json::from_value(json!("sci_tech")).unwrap();
        assert_eq!(id, ClassId::Text("sci_tech".to_string()));
        assert_eq!(id.to_string(), "sci_tech");
    }

    #[test]
    fn test_response_label_variant() {
        let body = json!({"category": "Science", "predicted_class": 3});
        let decoded: PredictionResponse = serde_json::from_value(body).unwrap();
        match decoded {
            PredictionResponse::Label {
                category,
                predicted_class,
            } => {
                assert_eq!(category, "Science");
                assert_eq!(predicted_class, ClassId::Int(3));
            }
            other => panic!("expected label, got {:?}", other),
        }
    }

    #[test]
    fn test_response_error_variant() {
        let body = json!({"error": "Empty or invalid 'text' field."});
        let decoded: PredictionResponse = serde_json::from_value(body).unwrap();
        match decoded {
            PredictionResponse::Rejected { error } => {
                assert_eq!(error, "Empty or invalid 'text' field.");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_error_field_wins_over_labels() {
        let body = json!({
            "error": "Prediction failed.",
            "category": "World",
            "predicted_class": 1
        });
        let decoded: PredictionResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(decoded, PredictionResponse::Rejected { .. }));
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let body = json!({"error": "Prediction failed.", "details": "stack trace"});
        let decoded: PredictionResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(decoded, PredictionResponse::Rejected { .. }));
    }

    #[test]
    fn test_unrecognized_shape_is_an_error() {
        let body = json!({"label": "Science"});
        let decoded: std::result::Result<PredictionResponse, _> = serde_json::from_value(body);
        assert!(decoded.is_err());
    }
}
