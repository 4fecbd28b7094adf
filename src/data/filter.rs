use super::model::{Catalog, DegreeLevel, LocationCategory, University};

// ---------------------------------------------------------------------------
// Filter criteria: a snapshot of the user's selections
// ---------------------------------------------------------------------------

/// Inclusive budget bounds, compared against the local tuition fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u64,
    pub max: u64,
}

impl BudgetRange {
    /// Accepts every fee.
    pub const FULL: BudgetRange = BudgetRange {
        min: 0,
        max: u64::MAX,
    };

    pub fn new(min: u64, max: u64) -> Self {
        BudgetRange { min, max }
    }

    /// An inverted range (`min > max`) contains nothing.
    pub fn contains(&self, fee: u64) -> bool {
        self.min <= fee && fee <= self.max
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        BudgetRange::FULL
    }
}

/// User-selected filter values. `None` (or an empty field string) means
/// "no constraint" for that dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub field: Option<String>,
    pub degree: Option<DegreeLevel>,
    pub location: Option<LocationCategory>,
    pub budget: BudgetRange,
}

impl FilterCriteria {
    /// The field selection, treating an empty string as unset.
    pub fn active_field(&self) -> Option<&str> {
        self.field.as_deref().filter(|f| !f.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Criteria with the search needle lower-cased once per evaluation.
struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search.to_lowercase(),
        }
    }

    fn matches(&self, uni: &University) -> bool {
        self.text(uni) && self.field(uni) && self.degree(uni) && self.location(uni) && self.budget(uni)
    }

    fn text(&self, uni: &University) -> bool {
        let hit = |name: &str| name.to_lowercase().contains(&self.needle);
        hit(&uni.name) || uni.programs.iter().any(|p| hit(&p.name))
    }

    fn field(&self, uni: &University) -> bool {
        match self.criteria.active_field() {
            Some(field) => uni.programs.iter().any(|p| p.field == field),
            None => true,
        }
    }

    fn degree(&self, uni: &University) -> bool {
        match self.criteria.degree {
            Some(level) => uni.programs.iter().any(|p| p.degree == level),
            None => true,
        }
    }

    fn location(&self, uni: &University) -> bool {
        self.criteria.location.map_or(true, |cat| uni.category == cat)
    }

    // Always the local fee, whatever the location selection.
    fn budget(&self, uni: &University) -> bool {
        self.criteria.budget.contains(uni.tuition_fee.local)
    }
}

/// Whether a single university passes every active criterion.
pub fn matches(uni: &University, criteria: &FilterCriteria) -> bool {
    Matcher::new(criteria).matches(uni)
}

/// Return the universities that pass all criteria, in their original order.
pub fn filter_universities<'a>(
    universities: &'a [University],
    criteria: &FilterCriteria,
) -> Vec<&'a University> {
    let matcher = Matcher::new(criteria);
    universities.iter().filter(|u| matcher.matches(u)).collect()
}

/// Return indices of catalog entries that pass all criteria.
pub fn filtered_indices(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    catalog
        .universities
        .iter()
        .enumerate()
        .filter(|(_, u)| matcher.matches(u))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{program, university};

    fn sample() -> Vec<University> {
        vec![
            university(
                "1",
                "LUMS",
                LocationCategory::Local,
                800_000,
                vec![program("cs1", "Computer Science", "Computer Science", DegreeLevel::Bachelor)],
            ),
            university(
                "2",
                "FAST NUCES",
                LocationCategory::Local,
                600_000,
                vec![program("eng1", "Software Engineering", "Engineering", DegreeLevel::Bachelor)],
            ),
            university(
                "3",
                "MIT",
                LocationCategory::International,
                5_500_000,
                vec![program(
                    "cs2",
                    "Computer Science & Engineering",
                    "Computer Science",
                    DegreeLevel::Bachelor,
                )],
            ),
        ]
    }

    fn names(result: &[&University]) -> Vec<String> {
        result.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn default_criteria_return_everything_in_order() {
        let data = sample();
        let result = filter_universities(&data, &FilterCriteria::default());
        assert_eq!(names(&result), vec!["LUMS", "FAST NUCES", "MIT"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let data = sample();
        let criteria = FilterCriteria {
            search: "e".into(),
            budget: BudgetRange::new(0, 1_000_000),
            ..Default::default()
        };
        let first = filter_universities(&data, &criteria);
        let second = filter_universities(&data, &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn search_is_case_insensitive() {
        let data = sample();
        let criteria = FilterCriteria {
            search: "lums".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter_universities(&data, &criteria)), vec!["LUMS"]);
    }

    #[test]
    fn search_matches_program_names() {
        let data = sample();
        let criteria = FilterCriteria {
            search: "software".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter_universities(&data, &criteria)), vec!["FAST NUCES"]);
    }

    #[test]
    fn unknown_field_yields_nothing() {
        let data = sample();
        let criteria = FilterCriteria {
            field: Some("Astrology".into()),
            ..Default::default()
        };
        assert!(filter_universities(&data, &criteria).is_empty());
    }

    #[test]
    fn field_match_is_case_sensitive() {
        let data = sample();
        let criteria = FilterCriteria {
            field: Some("computer science".into()),
            ..Default::default()
        };
        assert!(filter_universities(&data, &criteria).is_empty());
    }

    #[test]
    fn empty_field_string_is_unset() {
        let data = sample();
        let criteria = FilterCriteria {
            field: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_universities(&data, &criteria).len(), 3);
    }

    #[test]
    fn zero_budget_excludes_nonzero_fees() {
        let mut data = sample();
        data.push(university("4", "Free U", LocationCategory::Local, 0, vec![]));
        let criteria = FilterCriteria {
            budget: BudgetRange::new(0, 0),
            ..Default::default()
        };
        assert_eq!(names(&filter_universities(&data, &criteria)), vec!["Free U"]);
    }

    #[test]
    fn budget_bounds_are_inclusive() {
        let data = sample();
        let criteria = FilterCriteria {
            budget: BudgetRange::new(600_000, 800_000),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_universities(&data, &criteria)),
            vec!["LUMS", "FAST NUCES"]
        );
    }

    #[test]
    fn inverted_budget_matches_nothing() {
        let data = sample();
        let criteria = FilterCriteria {
            budget: BudgetRange::new(1_000_000, 0),
            ..Default::default()
        };
        assert!(filter_universities(&data, &criteria).is_empty());
    }

    #[test]
    fn budget_uses_local_fee_even_for_international_selection() {
        let mut data = sample();
        // International fee above the budget, local fee inside it.
        data[2].tuition_fee.local = 500_000;
        data[2].tuition_fee.international = 9_000_000;
        let criteria = FilterCriteria {
            location: Some(LocationCategory::International),
            budget: BudgetRange::new(0, 1_000_000),
            ..Default::default()
        };
        assert_eq!(names(&filter_universities(&data, &criteria)), vec!["MIT"]);
    }

    #[test]
    fn field_and_budget_combine() {
        let data = sample();
        let criteria = FilterCriteria {
            field: Some("Computer Science".into()),
            budget: BudgetRange::new(0, 1_000_000),
            ..Default::default()
        };
        assert_eq!(names(&filter_universities(&data, &criteria)), vec!["LUMS"]);
    }

    #[test]
    fn degree_and_location_filters() {
        let data = sample();
        let phd = FilterCriteria {
            degree: Some(DegreeLevel::PhD),
            ..Default::default()
        };
        assert!(filter_universities(&data, &phd).is_empty());

        let local = FilterCriteria {
            location: Some(LocationCategory::Local),
            ..Default::default()
        };
        assert_eq!(
            names(&filter_universities(&data, &local)),
            vec!["LUMS", "FAST NUCES"]
        );
    }

    #[test]
    fn indices_follow_catalog_order() {
        let catalog = Catalog::from_universities(sample()).unwrap();
        let criteria = FilterCriteria {
            location: Some(LocationCategory::International),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&catalog, &criteria), vec![2]);
        assert!(filtered_indices(&Catalog::default(), &FilterCriteria::default()).is_empty());
        assert!(matches(&catalog.universities[0], &FilterCriteria::default()));
    }
}
