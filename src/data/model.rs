use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Enumerated values
// ---------------------------------------------------------------------------

/// Level of a degree program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DegreeLevel {
    Bachelor,
    Master,
    PhD,
}

impl DegreeLevel {
    pub const ALL: [DegreeLevel; 3] = [DegreeLevel::Bachelor, DegreeLevel::Master, DegreeLevel::PhD];

    /// Label used in dropdowns ("Bachelor's", "Master's", "PhD").
    pub fn label(self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "Bachelor's",
            DegreeLevel::Master => "Master's",
            DegreeLevel::PhD => "PhD",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "Bachelor",
            DegreeLevel::Master => "Master",
            DegreeLevel::PhD => "PhD",
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DegreeLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| ParseEnumError::DegreeLevel(s.to_string()))
    }
}

/// Whether a university is in the home jurisdiction or abroad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Local,
    International,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 2] = [LocationCategory::Local, LocationCategory::International];

    pub fn label(self) -> &'static str {
        match self {
            LocationCategory::Local => "Local (Pakistan)",
            LocationCategory::International => "International",
        }
    }

    /// Short badge text shown on result cards.
    pub fn badge(self) -> &'static str {
        match self {
            LocationCategory::Local => "Local",
            LocationCategory::International => "International",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            LocationCategory::Local => "local",
            LocationCategory::International => "international",
        }
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocationCategory::ALL
            .into_iter()
            .find(|cat| cat.as_str() == s.trim())
            .ok_or_else(|| ParseEnumError::LocationCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    #[error("unknown degree level '{0}' (expected Bachelor, Master or PhD)")]
    DegreeLevel(String),
    #[error("unknown location category '{0}' (expected local or international)")]
    LocationCategory(String),
}

// ---------------------------------------------------------------------------
// Program / University records
// ---------------------------------------------------------------------------

/// A degree offering within a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub name: String,
    /// Field of study, compared verbatim by the field filter.
    pub field: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub degree: DegreeLevel,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub career_paths: Vec<String>,
    /// Display string, e.g. "PKR 80,000 - 150,000/month".
    pub average_salary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuitionFee {
    pub local: u64,
    pub international: u64,
}

/// An institution with its programs and cost / ranking metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub category: LocationCategory,
    pub ranking: u32,
    pub rating: f64,
    pub tuition_fee: TuitionFee,
    #[serde(default)]
    pub programs: Vec<Program>,
    pub scholarships: bool,
    #[serde(default)]
    pub image: String,
}

// ---------------------------------------------------------------------------
// Catalog – the validated, immutable collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate university id '{0}'")]
    DuplicateUniversity(String),
    #[error("university '{university}' lists program id '{program}' more than once")]
    DuplicateProgram { university: String, program: String },
    #[error("university '{0}' has an empty name")]
    EmptyName(String),
    #[error("university '{id}' has rating {rating}, expected a value between 0 and 5")]
    InvalidRating { id: String, rating: f64 },
}

/// The full catalog with pre-computed indices for the filter widgets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// All universities in source order.
    pub universities: Vec<University>,
    /// Sorted set of every program field of study.
    pub fields: BTreeSet<String>,
    /// Highest local tuition fee, 0 for an empty catalog.
    pub max_local_fee: u64,
}

impl Catalog {
    /// Validate the records and build the indices.
    pub fn from_universities(universities: Vec<University>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::new();
        for uni in &universities {
            if !seen_ids.insert(uni.id.as_str()) {
                return Err(CatalogError::DuplicateUniversity(uni.id.clone()));
            }
            if uni.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(uni.id.clone()));
            }
            if !uni.rating.is_finite() || !(0.0..=5.0).contains(&uni.rating) {
                return Err(CatalogError::InvalidRating {
                    id: uni.id.clone(),
                    rating: uni.rating,
                });
            }
            let mut program_ids = HashSet::new();
            for program in &uni.programs {
                if !program_ids.insert(program.id.as_str()) {
                    return Err(CatalogError::DuplicateProgram {
                        university: uni.id.clone(),
                        program: program.id.clone(),
                    });
                }
            }
        }

        let fields = universities
            .iter()
            .flat_map(|u| u.programs.iter().map(|p| p.field.clone()))
            .collect();
        let max_local_fee = universities
            .iter()
            .map(|u| u.tuition_fee.local)
            .max()
            .unwrap_or(0);

        Ok(Catalog {
            universities,
            fields,
            max_local_fee,
        })
    }

    pub fn len(&self) -> usize {
        self.universities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universities.is_empty()
    }

    /// Look up a university by id, returning its position as well.
    pub fn find(&self, id: &str) -> Option<(usize, &University)> {
        self.universities
            .iter()
            .enumerate()
            .find(|(_, u)| u.id == id)
    }
}
