//! Fragment classification.
//!
//! The extraction stage tags every curve fragment with its stroke color and
//! the names of the groups it belongs to. A [`RoleClassifier`] maps those
//! onto a [`Classification`]; only `Cut` and `Score` fragments become
//! [`MachinePath`]s.

use crate::error::PathError;
use crate::path::{MachinePath, Role};
use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An opaque RGB stroke color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[R={}, G={}, B={}]", self.r, self.g, self.b)
    }
}

/// How a fragment is worked, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Cut through
    Cut,
    /// Score the surface
    Score,
    /// Not part of the program
    Ignore,
}

impl Classification {
    /// The working role, `None` for ignored fragments
    pub fn role(self) -> Option<Role> {
        match self {
            Self::Cut => Some(Role::Cut),
            Self::Score => Some(Role::Score),
            Self::Ignore => None,
        }
    }
}

impl From<Role> for Classification {
    fn from(role: Role) -> Self {
        match role {
            Role::Cut => Self::Cut,
            Role::Score => Self::Score,
        }
    }
}

/// A fragment as handed over by the extraction stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFragment {
    /// Stroke color
    pub color: RgbColor,
    /// Names of the groups containing the fragment
    #[serde(default)]
    pub groups: Vec<String>,
    /// Points in drawing order
    pub points: Vec<Point>,
}

/// A `(classification, points)` pair consumed by path consolidation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFragment {
    /// How the fragment is worked
    pub classification: Classification,
    /// Points in drawing order
    pub points: Vec<Point>,
}

impl ClassifiedFragment {
    /// Create a classified fragment
    pub fn new(classification: Classification, points: Vec<Point>) -> Self {
        Self {
            classification,
            points,
        }
    }

    /// Convert into a path; `None` when the fragment is ignored
    pub fn into_path(self) -> Option<Result<MachinePath, PathError>> {
        self.classification
            .role()
            .map(|role| MachinePath::new(role, self.points))
    }
}

/// Maps stroke colors and group membership to a [`Classification`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleClassifier {
    cut_colors: HashSet<RgbColor>,
    score_colors: HashSet<RgbColor>,
    include_groups: HashSet<String>,
}

impl RoleClassifier {
    /// Create an empty classifier; everything is ignored until colors are added
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color whose fragments are cut
    pub fn add_cut_color(&mut self, color: RgbColor) {
        self.cut_colors.insert(color);
    }

    /// Add a color whose fragments are scored
    pub fn add_score_color(&mut self, color: RgbColor) {
        self.score_colors.insert(color);
    }

    /// Restrict classification to fragments in the named group
    pub fn add_group_name(&mut self, group: impl Into<String>) {
        self.include_groups.insert(group.into());
    }

    /// Colors mapped to cutting
    pub fn cut_colors(&self) -> &HashSet<RgbColor> {
        &self.cut_colors
    }

    /// Colors mapped to scoring
    pub fn score_colors(&self) -> &HashSet<RgbColor> {
        &self.score_colors
    }

    /// Classify a stroke color. Cut colors take precedence.
    pub fn classify(&self, color: RgbColor) -> Classification {
        match color {
            c if self.cut_colors.contains(&c) => Classification::Cut,
            c if self.score_colors.contains(&c) => Classification::Score,
            _ => Classification::Ignore,
        }
    }

    /// Whether the group filter accepts a fragment in `groups`.
    ///
    /// An empty filter accepts every fragment.
    pub fn groups_include<S: AsRef<str>>(&self, groups: &[S]) -> bool {
        self.include_groups.is_empty()
            || groups
                .iter()
                .any(|g| self.include_groups.contains(g.as_ref()))
    }

    /// Classify a raw fragment using both its color and its groups
    pub fn classify_fragment(&self, fragment: &RawFragment) -> Classification {
        if !self.groups_include(&fragment.groups) {
            return Classification::Ignore;
        }
        self.classify(fragment.color)
    }

    /// Classify a batch of raw fragments
    pub fn classify_all(
        &self,
        fragments: impl IntoIterator<Item = RawFragment>,
    ) -> Vec<ClassifiedFragment> {
        fragments
            .into_iter()
            .map(|fragment| {
                let classification = self.classify_fragment(&fragment);
                tracing::trace!(color = %fragment.color, ?classification, "classified fragment");
                ClassifiedFragment::new(classification, fragment.points)
            })
            .collect()
    }
}
