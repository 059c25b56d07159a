//! The catalog aggregate: all domain state and the matching algorithm

use std::collections::HashMap;

use crate::catalog::attraction::Attraction;
use crate::catalog::code::AnswerCode;
use crate::catalog::dictionary::{AttributeDictionary, WHAT_ATTRACTION_TYPE, WHAT_LOCATION};
use crate::catalog::itinerary::Itinerary;
use crate::catalog::vocabulary::Vocabulary;
use crate::core::error::CatalogError;
use crate::core::normalize::label_key;

/// The catalog of attractions and the question-to-attraction matching engine
///
/// Owns the attribute dictionary, the two controlled vocabularies, and the
/// attraction list. All mutations are append-only except
/// [`Catalog::remove_location`], and every one of them preserves the core
/// invariant: each attraction's eligibility code is exactly as wide as the
/// dictionary, bit `i` answering attraction-question `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    dictionary: AttributeDictionary,
    locations: Vocabulary,
    activity_types: Vocabulary,
    attractions: Vec<Attraction>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // --- read accessors -------------------------------------------------

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    pub fn attraction_names(&self) -> Vec<&str> {
        self.attractions.iter().map(Attraction::name).collect()
    }

    /// Attraction-facing phrasings, in insertion (code bit) order
    pub fn attraction_questions(&self) -> &[String] {
        self.dictionary.attraction_questions()
    }

    /// Group-facing phrasings, index-aligned with the attraction side
    pub fn group_questions(&self) -> &[String] {
        self.dictionary.group_questions()
    }

    pub fn locations(&self) -> &[String] {
        self.locations.labels()
    }

    pub fn activity_types(&self) -> &[String] {
        self.activity_types.labels()
    }

    /// The reserved questions paired with their allowed answers, for the
    /// interaction layer to offer as choices when registering an attraction
    pub fn mandatory_questions(&self) -> [(&'static str, &[String]); 2] {
        [
            (WHAT_ATTRACTION_TYPE, self.activity_types.labels()),
            (WHAT_LOCATION, self.locations.labels()),
        ]
    }

    // --- validation predicates ------------------------------------------

    /// Pre-check a question pair before collecting per-attraction answers
    pub fn is_question_pair_valid(&self, attraction_question: &str, group_question: &str) -> bool {
        self.dictionary
            .is_pair_valid(attraction_question, group_question)
    }

    /// Pre-check an attraction name before collecting its answers
    pub fn is_attraction_name_valid(&self, name: &str) -> bool {
        let key = label_key(name);
        !self
            .attractions
            .iter()
            .any(|attraction| label_key(attraction.name()) == key)
    }

    // --- mutations ------------------------------------------------------

    /// Add a location label, returning its stored form
    pub fn add_location(&mut self, label: &str) -> Result<String, CatalogError> {
        self.locations
            .insert(label)
            .ok_or_else(|| CatalogError::DuplicateLocation(label.to_string()))
    }

    /// Add an activity-type label, returning its stored form
    pub fn add_activity_type(&mut self, label: &str) -> Result<String, CatalogError> {
        self.activity_types
            .insert(label)
            .ok_or_else(|| CatalogError::DuplicateActivityType(label.to_string()))
    }

    /// Remove a location that no attraction references, returning its
    /// stored form
    pub fn remove_location(&mut self, label: &str) -> Result<String, CatalogError> {
        let canonical = self
            .locations
            .canonical(label)
            .ok_or_else(|| CatalogError::UnknownLocation(label.to_string()))?
            .to_string();
        let users: Vec<String> = self
            .attractions
            .iter()
            .filter(|attraction| attraction.location() == canonical)
            .map(|attraction| attraction.name().to_string())
            .collect();
        if !users.is_empty() {
            return Err(CatalogError::LocationInUse {
                location: canonical,
                attractions: users,
            });
        }
        // canonical came from the vocabulary, so remove cannot miss
        Ok(self.locations.remove(&canonical).unwrap_or(canonical))
    }

    /// Append a question pair and extend every attraction's code
    ///
    /// `answers` must hold one bit per existing attraction, keyed by
    /// attraction name. The mutation is atomic: nothing changes unless
    /// every answer is present and the pair is new.
    pub fn add_question(
        &mut self,
        attraction_question: &str,
        group_question: &str,
        answers: &HashMap<String, bool>,
    ) -> Result<(), CatalogError> {
        let bits: Vec<bool> = self
            .attractions
            .iter()
            .map(|attraction| {
                answers
                    .get(attraction.name())
                    .copied()
                    .ok_or_else(|| CatalogError::MissingAnswer(attraction.name().to_string()))
            })
            .collect::<Result<_, _>>()?;
        self.dictionary
            .push_pair(attraction_question, group_question)?;
        for (attraction, bit) in self.attractions.iter_mut().zip(bits) {
            attraction.push_answer(bit);
        }
        Ok(())
    }

    /// Register an attraction
    ///
    /// The activity type and location must be existing vocabulary labels;
    /// `answers` must hold one bit per current attraction-question, keyed
    /// by the question's stored text. The eligibility code is built in
    /// question-insertion order.
    pub fn add_attraction(
        &mut self,
        name: &str,
        activity_type: &str,
        location: &str,
        answers: &HashMap<String, bool>,
    ) -> Result<(), CatalogError> {
        if !self.is_attraction_name_valid(name) {
            return Err(CatalogError::DuplicateAttraction(name.to_string()));
        }
        let activity_type = self
            .activity_types
            .canonical(activity_type)
            .ok_or_else(|| CatalogError::UnknownActivityType(activity_type.to_string()))?
            .to_string();
        let location = self
            .locations
            .canonical(location)
            .ok_or_else(|| CatalogError::UnknownLocation(location.to_string()))?
            .to_string();

        let mut code = AnswerCode::new();
        for question in self.dictionary.attraction_questions() {
            let bit = answers
                .get(question)
                .copied()
                .ok_or_else(|| CatalogError::MissingAnswer(question.clone()))?;
            code.push(bit);
        }

        self.attractions
            .push(Attraction::new(name, activity_type, location, code));
        Ok(())
    }

    // --- matching -------------------------------------------------------

    /// Match the group's answer code against every attraction
    ///
    /// The code must answer every group-question: its width has to equal
    /// the dictionary's, one bit per question in order. An attraction
    /// qualifies when its eligibility code covers the group code (yes to
    /// everything the group wants). The result is the full location ×
    /// activity-type grid with qualifying attractions placed by their own
    /// stored labels.
    pub fn build_itinerary(&self, group_code: &AnswerCode) -> Result<Itinerary, CatalogError> {
        let expected = self.dictionary.len();
        if group_code.width() != expected {
            return Err(CatalogError::CodeWidthMismatch {
                expected,
                actual: group_code.width(),
            });
        }
        let mut itinerary =
            Itinerary::with_grid(self.locations.labels(), self.activity_types.labels());
        for attraction in &self.attractions {
            if attraction.code().covers(group_code) {
                itinerary.place(
                    attraction.location(),
                    attraction.activity_type(),
                    attraction.name(),
                );
            }
        }
        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs
            .iter()
            .map(|(key, bit)| (key.to_string(), *bit))
            .collect()
    }

    fn catalog_with_louvre() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_location("Paris").unwrap();
        catalog.add_activity_type("Museum").unwrap();
        catalog
            .add_attraction("Louvre", "Museum", "Paris", &HashMap::new())
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_question_extends_every_code_by_one_bit() {
        let mut catalog = catalog_with_louvre();
        catalog.add_activity_type("Park").unwrap();
        catalog
            .add_attraction("Tuileries", "Park", "Paris", &HashMap::new())
            .unwrap();

        catalog
            .add_question(
                "Is it indoors?",
                "Do you want indoor activities?",
                &answers(&[("Louvre", true), ("Tuileries", false)]),
            )
            .unwrap();

        let codes: Vec<String> = catalog
            .attractions()
            .iter()
            .map(|attraction| attraction.code().to_string())
            .collect();
        assert_eq!(codes, ["1", "0"]);
    }

    #[test]
    fn test_add_question_missing_answer_mutates_nothing() {
        let mut catalog = catalog_with_louvre();
        let err = catalog
            .add_question("Is it indoors?", "Indoor preference?", &HashMap::new())
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingAnswer("Louvre".to_string()));
        assert!(catalog.attraction_questions().is_empty());
        assert!(catalog.attractions()[0].code().is_empty());
    }

    #[test]
    fn test_attraction_name_duplicates_rejected_loosely() {
        let catalog = catalog_with_louvre();
        assert!(!catalog.is_attraction_name_valid(" LOUVRE "));
        assert!(catalog.is_attraction_name_valid("Orsay"));
    }

    #[test]
    fn test_add_attraction_requires_known_labels() {
        let mut catalog = catalog_with_louvre();
        let err = catalog
            .add_attraction("Orsay", "Gallery", "Paris", &HashMap::new())
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownActivityType("Gallery".to_string()));

        let err = catalog
            .add_attraction("Orsay", "Museum", "Rome", &HashMap::new())
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownLocation("Rome".to_string()));
    }

    #[test]
    fn test_add_attraction_builds_code_in_question_order() {
        let mut catalog = catalog_with_louvre();
        catalog
            .add_question(
                "Is it indoors?",
                "Do you want indoor activities?",
                &answers(&[("Louvre", true)]),
            )
            .unwrap();
        catalog
            .add_question(
                "Is it free?",
                "Is budget a concern?",
                &answers(&[("Louvre", false)]),
            )
            .unwrap();

        catalog
            .add_attraction(
                "Orsay",
                "museum",
                " PARIS",
                &answers(&[("Is it indoors?", true), ("Is it free?", true)]),
            )
            .unwrap();

        let orsay = &catalog.attractions()[1];
        assert_eq!(orsay.code().to_string(), "11");
        // labels resolved to their canonical stored forms
        assert_eq!(orsay.activity_type(), "Museum");
        assert_eq!(orsay.location(), "Paris");
    }

    #[test]
    fn test_remove_location_semantics() {
        let mut catalog = catalog_with_louvre();
        catalog.add_location("Rome").unwrap();

        assert_eq!(catalog.remove_location("rome ").unwrap(), "Rome");
        assert_eq!(catalog.locations(), ["Paris"]);

        let err = catalog.remove_location("Rome").unwrap_err();
        assert_eq!(err, CatalogError::UnknownLocation("Rome".to_string()));

        let err = catalog.remove_location("Paris").unwrap_err();
        assert_eq!(
            err,
            CatalogError::LocationInUse {
                location: "Paris".to_string(),
                attractions: vec!["Louvre".to_string()],
            }
        );
        assert_eq!(catalog.locations(), ["Paris"]);
    }

    #[test]
    fn test_itinerary_width_mismatch_is_an_error() {
        let catalog = catalog_with_louvre();
        let code: AnswerCode = "1".parse().unwrap();
        let err = catalog.build_itinerary(&code).unwrap_err();
        assert_eq!(err, CatalogError::CodeWidthMismatch { expected: 0, actual: 1 });
    }

    #[test]
    fn test_itinerary_subset_match() {
        let mut catalog = catalog_with_louvre();
        catalog.add_activity_type("Park").unwrap();
        catalog
            .add_attraction("Tuileries", "Park", "Paris", &HashMap::new())
            .unwrap();
        catalog
            .add_question(
                "Is it indoors?",
                "Do you want indoor activities?",
                &answers(&[("Louvre", true), ("Tuileries", false)]),
            )
            .unwrap();

        // Group wants indoor: only the Louvre qualifies
        let indoor = catalog.build_itinerary(&"1".parse().unwrap()).unwrap();
        assert_eq!(
            indoor.attractions_at("Paris", "Museum"),
            Some(&["Louvre".to_string()][..])
        );
        assert_eq!(indoor.attractions_at("Paris", "Park"), Some(&[][..]));

        // A "no" places no constraint: everything qualifies
        let anything = catalog.build_itinerary(&"0".parse().unwrap()).unwrap();
        assert_eq!(anything.match_count(), 2);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut catalog = Catalog::new();
        catalog.add_location("Paris").unwrap();
        catalog.add_activity_type("Museum").unwrap();
        catalog
            .add_attraction("Louvre", "Museum", "Paris", &HashMap::new())
            .unwrap();
        catalog
            .add_question(
                "Is it indoors?",
                "Do you want indoor activities?",
                &answers(&[("Louvre", true)]),
            )
            .unwrap();

        let itinerary = catalog.build_itinerary(&"1".parse().unwrap()).unwrap();
        assert_eq!(
            itinerary.attractions_at("Paris", "Museum"),
            Some(&["Louvre".to_string()][..])
        );
    }
}
