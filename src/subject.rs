//! The static subject catalog.
//!
//! Six topics, each offering three preset scenes. The catalog is defined at
//! compile time and never changes; selection state refers to entries by
//! [`SubjectId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EduError;

/// Number of preset scenes per subject.
pub const MODELS_PER_SUBJECT: usize = 3;

/// Identifier of one of the six subjects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SubjectId {
    /// DNA, heart, plant cell.
    Biology,
    /// Solar system, orbits, galaxy.
    Space,
    /// Solids, vectors, fractal.
    Math,
    /// Globe, continents, volcano.
    Geography,
    /// Water molecule, atomic model, reaction.
    Chemistry,
    /// Atom, light rays, circuit.
    Physics,
}

impl SubjectId {
    /// All ids in catalog order.
    pub const ALL: [Self; 6] = [
        Self::Biology,
        Self::Space,
        Self::Math,
        Self::Geography,
        Self::Chemistry,
        Self::Physics,
    ];

    /// The lowercase string id used on the command line and in presets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biology => "biology",
            Self::Space => "space",
            Self::Math => "math",
            Self::Geography => "geography",
            Self::Chemistry => "chemistry",
            Self::Physics => "physics",
        }
    }

    /// Parse a string id, returning `None` for anything not in the catalog.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// Catalog entry for this id.
    #[must_use]
    pub fn subject(self) -> &'static Subject {
        &SUBJECTS[self as usize]
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectId {
    type Err = EduError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| EduError::UnknownSubject(s.to_owned()))
    }
}

/// Display color of a subject card: a tailwind-style tag and its RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectColor {
    /// Palette name, e.g. `"green"`.
    pub tag: &'static str,
    /// sRGB hex value of the accent.
    pub hex: u32,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Stable identifier.
    pub id: SubjectId,
    /// Human-readable name.
    pub name: &'static str,
    /// Icon name (lucide icon set).
    pub icon: &'static str,
    /// Card accent color.
    pub color: SubjectColor,
    /// One-line description.
    pub description: &'static str,
    /// Scene labels, indexed by model index.
    pub examples: [&'static str; MODELS_PER_SUBJECT],
    /// "Did you know?" line shown alongside the scene.
    pub fact: &'static str,
}

impl Subject {
    /// Label of the scene at `index`, if in range.
    #[must_use]
    pub fn model_label(&self, index: usize) -> Option<&'static str> {
        self.examples.get(index).copied()
    }
}

/// The catalog, in [`SubjectId::ALL`] order.
pub static SUBJECTS: [Subject; 6] = [
    Subject {
        id: SubjectId::Biology,
        name: "Biology",
        icon: "heart",
        color: SubjectColor {
            tag: "green",
            hex: 0x22c55e,
        },
        description: "Explore DNA, cells, and human anatomy in 3D",
        examples: ["DNA Helix", "Human Heart", "Plant Cell"],
        fact: "DNA contains the genetic instructions for all living organisms!",
    },
    Subject {
        id: SubjectId::Space,
        name: "Space Science",
        icon: "telescope",
        color: SubjectColor {
            tag: "purple",
            hex: 0xa855f7,
        },
        description: "Journey through the solar system and beyond",
        examples: ["Solar System", "Planetary Orbits", "Galaxies"],
        fact: "Jupiter is so large that all other planets could fit inside it!",
    },
    Subject {
        id: SubjectId::Math,
        name: "Mathematics",
        icon: "calculator",
        color: SubjectColor {
            tag: "blue",
            hex: 0x3b82f6,
        },
        description: "Visualize geometric shapes and mathematical concepts",
        examples: ["3D Shapes", "Vectors", "Fractals"],
        fact: "The golden ratio appears frequently in nature and art!",
    },
    Subject {
        id: SubjectId::Geography,
        name: "Geography",
        icon: "globe",
        color: SubjectColor {
            tag: "emerald",
            hex: 0x10b981,
        },
        description: "Explore Earth's features and continents",
        examples: ["3D Globe", "Continents", "Volcanoes"],
        fact: "Earth's continents are constantly moving due to plate tectonics!",
    },
    Subject {
        id: SubjectId::Chemistry,
        name: "Chemistry",
        icon: "atom",
        color: SubjectColor {
            tag: "orange",
            hex: 0xf97316,
        },
        description: "Interact with molecules and atomic structures",
        examples: ["Molecules", "Atomic Models", "Reactions"],
        fact: "Water molecules are polar, which gives water its unique properties!",
    },
    Subject {
        id: SubjectId::Physics,
        name: "Physics",
        icon: "lightbulb",
        color: SubjectColor {
            tag: "yellow",
            hex: 0xeab308,
        },
        description: "Understand forces, energy, and physical laws",
        examples: ["Pendulum", "Light Rays", "Circuits"],
        fact: "Atoms are 99.9% empty space!",
    },
];

/// The whole catalog.
#[must_use]
pub fn all() -> &'static [Subject] {
    &SUBJECTS
}

/// Look up a catalog entry by its string id.
#[must_use]
pub fn get_subject_by_id(id: &str) -> Option<&'static Subject> {
    SubjectId::parse(id).map(SubjectId::subject)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        for (i, subject) in SUBJECTS.iter().enumerate() {
            assert_eq!(subject.id, SubjectId::ALL[i]);
            assert_eq!(subject.id.subject().name, subject.name);
        }
    }

    #[test]
    fn lookup_by_string_id() {
        let space = get_subject_by_id("space").unwrap();
        assert_eq!(space.name, "Space Science");
        assert_eq!(space.model_label(2), Some("Galaxies"));
        assert_eq!(space.model_label(3), None);
        assert!(get_subject_by_id("astrology").is_none());
        assert!(get_subject_by_id("Biology").is_none());
    }

    #[test]
    fn from_str_reports_unknown_ids() {
        assert_eq!("physics".parse::<SubjectId>().ok(), Some(SubjectId::Physics));
        let err = "music".parse::<SubjectId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown subject: music");
    }

    #[test]
    fn every_subject_has_a_fact() {
        for subject in all() {
            assert!(!subject.fact.is_empty(), "{} has no fact", subject.id);
        }
        assert!(get_subject_by_id("space").unwrap().fact.contains("Jupiter"));
    }

    #[test]
    fn every_subject_lists_three_examples() {
        for subject in all() {
            assert!(subject.examples.iter().all(|e| !e.is_empty()));
            assert!(!subject.description.is_empty());
        }
    }
}
