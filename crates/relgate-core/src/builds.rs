use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// Widest range a selection may expand to.
pub const MAX_RANGE_BUILDS: u32 = 10_000;

/// Builds a report covers: an inclusive numeric range or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildSelection {
    Range { start: u32, end: u32 },
    List { builds: Vec<String> },
}

impl BuildSelection {
    /// Parses `"95-106"` as a range and `"95,96,101"` as a list.
    ///
    /// A dash form whose bounds are not numbers is kept as a one-item list.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(GateError::InvalidBuildSelection(
                "build selection is empty".to_string(),
            ));
        }

        if trimmed.contains('-')
            && !trimmed.contains(',')
            && let Some(range) = parse_range(trimmed)?
        {
            return Ok(range);
        }

        let builds = trimmed
            .split(',')
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if builds.is_empty() {
            return Err(GateError::InvalidBuildSelection(format!(
                "no builds in '{trimmed}'"
            )));
        }
        Ok(Self::List { builds })
    }

    #[must_use]
    pub fn builds(&self) -> Vec<String> {
        match self {
            Self::Range { start, end } => (*start..=*end).map(|build| build.to_string()).collect(),
            Self::List { builds } => builds.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Range { start, end } => (end - start) as usize + 1,
            Self::List { builds } => builds.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable form, e.g. `"95, 96, 97"`.
    #[must_use]
    pub fn display(&self) -> String {
        self.builds().join(", ")
    }

    /// Form safe for report file names, e.g. `"95-106"` or `"95_96_101"`.
    #[must_use]
    pub fn file_label(&self) -> String {
        match self {
            Self::Range { start, end } => format!("{start}-{end}"),
            Self::List { builds } => builds.join("_"),
        }
    }
}

fn parse_range(raw: &str) -> Result<Option<BuildSelection>> {
    let Some((start, end)) = raw.split_once('-') else {
        return Ok(None);
    };
    let (Ok(start), Ok(end)) = (start.trim().parse::<u32>(), end.trim().parse::<u32>()) else {
        return Ok(None);
    };
    if start > end {
        return Err(GateError::InvalidBuildSelection(format!(
            "range start {start} is greater than end {end}"
        )));
    }
    if end - start >= MAX_RANGE_BUILDS {
        return Err(GateError::InvalidBuildSelection(format!(
            "range {start}-{end} spans more than {MAX_RANGE_BUILDS} builds"
        )));
    }
    Ok(Some(BuildSelection::Range { start, end }))
}

impl FromStr for BuildSelection {
    type Err = GateError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

impl fmt::Display for BuildSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
