//! Console renderer for itinerary results

use colored::Colorize;
use itinera_domain::Itinerary;

/// Formats an itinerary as location → activity type → attractions
pub struct ItineraryFormatter;

impl ItineraryFormatter {
    /// Render the full grid, empty buckets included
    pub fn format(itinerary: &Itinerary) -> String {
        if itinerary.groups().is_empty() {
            return "The catalog has no locations yet.\n".to_string();
        }

        let mut output = String::new();
        for group in itinerary.groups() {
            output.push_str(&format!(
                "{}\n",
                format!("{}:", group.location()).cyan().bold()
            ));
            for bucket in group.buckets() {
                output.push_str(&format!(
                    "  {}\n",
                    format!("{}:", bucket.activity_type()).yellow()
                ));
                if bucket.attractions().is_empty() {
                    output.push_str(&format!("    {}\n", "(no matches)".dimmed()));
                } else {
                    for attraction in bucket.attractions() {
                        output.push_str(&format!("    {attraction}\n"));
                    }
                }
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itinera_domain::Catalog;
    use std::collections::HashMap;

    #[test]
    fn renders_full_grid_with_empty_buckets() {
        colored::control::set_override(false);

        let mut catalog = Catalog::new();
        catalog.add_location("Paris").unwrap();
        catalog.add_activity_type("Museum").unwrap();
        catalog.add_activity_type("Park").unwrap();
        catalog
            .add_attraction("Louvre", "Museum", "Paris", &HashMap::new())
            .unwrap();

        let itinerary = catalog
            .build_itinerary(&itinera_domain::AnswerCode::new())
            .unwrap();
        let rendered = ItineraryFormatter::format(&itinerary);
        assert_eq!(
            rendered,
            "Paris:\n  Museum:\n    Louvre\n  Park:\n    (no matches)\n\n"
        );
    }

    #[test]
    fn empty_catalog_has_a_message() {
        let rendered = ItineraryFormatter::format(&Itinerary::default());
        assert_eq!(rendered, "The catalog has no locations yet.\n");
    }
}
