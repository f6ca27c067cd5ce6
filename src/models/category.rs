//! Known categories and their chart colors
//!
//! Categories are free-form labels; the ones below are offered as defaults
//! and get a fixed color. Anything else is drawn with the fallback grey.

use std::fmt;

use super::transaction::TransactionType;

/// Color used for categories without an entry in the table
pub const FALLBACK_COLOR: &str = "#9E9E9E";

/// A category the app suggests out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCategory {
    Salary,
    Bonus,
    Investment,
    Food,
    Transport,
    Entertainment,
    Bills,
    Shopping,
    Other,
}

impl KnownCategory {
    pub const ALL: [KnownCategory; 9] = [
        Self::Salary,
        Self::Bonus,
        Self::Investment,
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Bills,
        Self::Shopping,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Bonus => "Bonus",
            Self::Investment => "Investment",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Hex color used for this category in charts and breakdowns
    pub fn color(&self) -> &'static str {
        match self {
            Self::Salary => "#03DAC5",
            Self::Bonus => "#018786",
            Self::Investment => "#BB86FC",
            Self::Food => "#F44336",
            Self::Transport => "#FF4081",
            Self::Entertainment => "#FF9800",
            Self::Bills => "#4CAF50",
            Self::Shopping => "#E040FB",
            Self::Other => "#3F51B5",
        }
    }

    /// The transaction type this category is normally used with
    pub fn usual_type(&self) -> TransactionType {
        match self {
            Self::Salary | Self::Bonus | Self::Investment => TransactionType::Income,
            _ => TransactionType::Expense,
        }
    }

    /// Exact, case-sensitive lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == label)
    }

    /// Default categories for a transaction type, in menu order
    pub fn defaults_for(kind: TransactionType) -> Vec<KnownCategory> {
        Self::ALL
            .iter()
            .copied()
            .filter(|c| c.usual_type() == kind || *c == Self::Other)
            .collect()
    }
}

impl fmt::Display for KnownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Color for any category label, falling back to grey
pub fn category_color(label: &str) -> &'static str {
    KnownCategory::from_label(label)
        .map(|c| c.color())
        .unwrap_or(FALLBACK_COLOR)
}
