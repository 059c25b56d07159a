//! Serde model of the persisted catalog document
//!
//! The on-disk layout is a single JSON object with five top-level keys, any
//! of which may be absent. Each attraction is a flat map from question text
//! to its "0"/"1" answer, plus the two reserved categorical questions and a
//! derived "Code" string. These structs mirror that exact shape; the
//! conversion to and from the domain [`Catalog`] lives here too.

use itinera_application::StoreError;
use itinera_domain::{Catalog, WHAT_ATTRACTION_TYPE, WHAT_LOCATION};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// Key of the derived eligibility-code field within an attraction record
pub const CODE_KEY: &str = "Code";

/// Raw persisted document (exact JSON structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    #[serde(rename = "Attractions")]
    pub attractions: BTreeMap<String, BTreeMap<String, String>>,

    #[serde(rename = "Group Questions")]
    pub group_questions: Vec<String>,

    /// Attraction-facing phrasings, index-aligned with "Group Questions"
    #[serde(rename = "Itinerary Questions")]
    pub attraction_questions: Vec<String>,

    #[serde(rename = "Activity Types")]
    pub activity_types: Vec<String>,

    #[serde(rename = "Locations")]
    pub locations: Vec<String>,
}

impl CatalogDocument {
    /// Flatten a catalog into the persisted shape
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let questions = catalog.attraction_questions();
        let attractions = catalog
            .attractions()
            .iter()
            .map(|attraction| {
                let mut fields = BTreeMap::new();
                for (question, bit) in questions.iter().zip(attraction.code().bits()) {
                    fields.insert(question.clone(), bit_to_answer(bit).to_string());
                }
                fields.insert(
                    WHAT_ATTRACTION_TYPE.to_string(),
                    attraction.activity_type().to_string(),
                );
                fields.insert(WHAT_LOCATION.to_string(), attraction.location().to_string());
                fields.insert(CODE_KEY.to_string(), attraction.code().to_string());
                (attraction.name().to_string(), fields)
            })
            .collect();

        Self {
            attractions,
            group_questions: catalog.group_questions().to_vec(),
            attraction_questions: questions.to_vec(),
            activity_types: catalog.activity_types().to_vec(),
            locations: catalog.locations().to_vec(),
        }
    }

    /// Rebuild the domain catalog, validating as the engine would
    ///
    /// The per-question "0"/"1" entries are authoritative; the stored
    /// "Code" is only cross-checked and rewritten on the next save.
    pub fn into_catalog(self) -> Result<Catalog, StoreError> {
        if self.group_questions.len() != self.attraction_questions.len() {
            return Err(StoreError::Malformed(format!(
                "{} group questions but {} itinerary questions",
                self.group_questions.len(),
                self.attraction_questions.len()
            )));
        }

        let mut catalog = Catalog::new();
        for label in &self.locations {
            catalog
                .add_location(label)
                .map_err(|e| StoreError::Malformed(e.to_string()))?;
        }
        for label in &self.activity_types {
            catalog
                .add_activity_type(label)
                .map_err(|e| StoreError::Malformed(e.to_string()))?;
        }
        for (question, group_question) in self
            .attraction_questions
            .iter()
            .zip(&self.group_questions)
        {
            // no attractions exist yet, so no backfill answers are needed
            catalog
                .add_question(question, group_question, &HashMap::new())
                .map_err(|e| StoreError::Malformed(e.to_string()))?;
        }

        for (name, fields) in &self.attractions {
            let activity_type = fields.get(WHAT_ATTRACTION_TYPE).ok_or_else(|| {
                StoreError::Malformed(format!("attraction {name} has no activity type"))
            })?;
            let location = fields.get(WHAT_LOCATION).ok_or_else(|| {
                StoreError::Malformed(format!("attraction {name} has no location"))
            })?;

            let mut answers = HashMap::new();
            let mut code = String::new();
            for question in &self.attraction_questions {
                let raw = fields.get(question).ok_or_else(|| {
                    StoreError::Malformed(format!(
                        "attraction {name} has no answer for {question:?}"
                    ))
                })?;
                let bit = answer_to_bit(name, raw)?;
                code.push(if bit { '1' } else { '0' });
                answers.insert(question.clone(), bit);
            }

            if let Some(stored) = fields.get(CODE_KEY)
                && stored != &code
            {
                warn!(
                    attraction = %name,
                    stored = %stored,
                    derived = %code,
                    "stored code disagrees with per-question answers; answers win"
                );
            }

            catalog
                .add_attraction(name, activity_type, location, &answers)
                .map_err(|e| StoreError::Malformed(e.to_string()))?;
        }

        Ok(catalog)
    }
}

fn bit_to_answer(bit: bool) -> &'static str {
    if bit { "1" } else { "0" }
}

fn answer_to_bit(attraction: &str, raw: &str) -> Result<bool, StoreError> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(StoreError::Malformed(format!(
            "attraction {attraction} has answer {other:?}, expected \"0\" or \"1\""
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_top_level_keys_default_to_empty() {
        let document: CatalogDocument = serde_json::from_str("{}").unwrap();
        let catalog = document.into_catalog().unwrap();
        assert!(catalog.attractions().is_empty());
        assert!(catalog.locations().is_empty());
        assert!(catalog.group_questions().is_empty());
    }

    #[test]
    fn renamed_keys_round_trip() {
        let json = serde_json::json!({
            "Attractions": {
                "Louvre": {
                    "Is it indoors?": "1",
                    "What type of attraction is this?": "Museum",
                    "What is the location of this activity?": "Paris",
                    "Code": "1"
                }
            },
            "Group Questions": ["Do you want indoor activities?"],
            "Itinerary Questions": ["Is it indoors?"],
            "Activity Types": ["Museum"],
            "Locations": ["Paris"]
        });
        let document: CatalogDocument = serde_json::from_value(json.clone()).unwrap();
        let catalog = document.into_catalog().unwrap();

        assert_eq!(catalog.attraction_names(), ["Louvre"]);
        assert_eq!(catalog.attractions()[0].code().to_string(), "1");
        assert_eq!(catalog.attractions()[0].location(), "Paris");

        let rewritten = serde_json::to_value(CatalogDocument::from_catalog(&catalog)).unwrap();
        assert_eq!(rewritten, json);
    }

    #[test]
    fn mismatched_question_columns_are_malformed() {
        let document: CatalogDocument = serde_json::from_value(serde_json::json!({
            "Group Questions": ["One?"],
            "Itinerary Questions": []
        }))
        .unwrap();
        assert!(matches!(
            document.into_catalog(),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn missing_answer_is_malformed() {
        let document: CatalogDocument = serde_json::from_value(serde_json::json!({
            "Attractions": {
                "Louvre": {
                    "What type of attraction is this?": "Museum",
                    "What is the location of this activity?": "Paris"
                }
            },
            "Group Questions": ["Do you want indoor activities?"],
            "Itinerary Questions": ["Is it indoors?"],
            "Activity Types": ["Museum"],
            "Locations": ["Paris"]
        }))
        .unwrap();
        let err = document.into_catalog().unwrap_err();
        assert!(err.to_string().contains("no answer for"));
    }

    #[test]
    fn non_bit_answer_is_malformed() {
        let document: CatalogDocument = serde_json::from_value(serde_json::json!({
            "Attractions": {
                "Louvre": {
                    "Is it indoors?": "yes",
                    "What type of attraction is this?": "Museum",
                    "What is the location of this activity?": "Paris"
                }
            },
            "Group Questions": ["Do you want indoor activities?"],
            "Itinerary Questions": ["Is it indoors?"],
            "Activity Types": ["Museum"],
            "Locations": ["Paris"]
        }))
        .unwrap();
        let err = document.into_catalog().unwrap_err();
        assert!(err.to_string().contains("expected \"0\" or \"1\""));
    }

    #[test]
    fn unknown_label_is_malformed() {
        let document: CatalogDocument = serde_json::from_value(serde_json::json!({
            "Attractions": {
                "Louvre": {
                    "What type of attraction is this?": "Museum",
                    "What is the location of this activity?": "Atlantis"
                }
            },
            "Activity Types": ["Museum"],
            "Locations": ["Paris"]
        }))
        .unwrap();
        let err = document.into_catalog().unwrap_err();
        assert!(err.to_string().contains("unknown location"));
    }
}
