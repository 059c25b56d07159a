//! Itinerary result: the location × activity-type grid

/// Attractions of one activity type within a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityBucket {
    activity_type: String,
    attractions: Vec<String>,
}

impl ActivityBucket {
    pub fn activity_type(&self) -> &str {
        &self.activity_type
    }

    pub fn attractions(&self) -> &[String] {
        &self.attractions
    }
}

/// All buckets of one location, one per known activity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    location: String,
    buckets: Vec<ActivityBucket>,
}

impl LocationGroup {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn buckets(&self) -> &[ActivityBucket] {
        &self.buckets
    }
}

/// The result of matching a group's answers against the catalog
///
/// Every known location appears, and within it every known activity type,
/// in vocabulary insertion order. Buckets with no qualifying attraction are
/// present and empty, so the rendered output always shows the full grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    groups: Vec<LocationGroup>,
}

impl Itinerary {
    /// Build an empty grid over the known locations and activity types
    pub fn with_grid(locations: &[String], activity_types: &[String]) -> Self {
        let groups = locations
            .iter()
            .map(|location| LocationGroup {
                location: location.clone(),
                buckets: activity_types
                    .iter()
                    .map(|activity_type| ActivityBucket {
                        activity_type: activity_type.clone(),
                        attractions: Vec::new(),
                    })
                    .collect(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[LocationGroup] {
        &self.groups
    }

    /// Total number of placed attractions
    pub fn match_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(|group| &group.buckets)
            .map(|bucket| bucket.attractions.len())
            .sum()
    }

    /// The attractions in one bucket, if the pair of labels is known
    pub fn attractions_at(&self, location: &str, activity_type: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|group| group.location == location)?
            .buckets
            .iter()
            .find(|bucket| bucket.activity_type == activity_type)
            .map(|bucket| bucket.attractions.as_slice())
    }

    /// Place a qualifying attraction into its bucket
    ///
    /// The labels are canonical vocabulary entries, so the bucket exists by
    /// construction.
    pub(crate) fn place(&mut self, location: &str, activity_type: &str, attraction: &str) {
        if let Some(group) = self.groups.iter_mut().find(|group| group.location == location)
            && let Some(bucket) = group
                .buckets
                .iter_mut()
                .find(|bucket| bucket.activity_type == activity_type)
        {
            bucket.attractions.push(attraction.to_string());
        }
    }
}
