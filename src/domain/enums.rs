use serde::{Deserialize, Serialize};

/// Which subset of the list is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Done,
}

impl Filter {
    /// Parse a filter name as typed on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "pending" | "todo" => Some(Self::Pending),
            "done" | "completed" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }

    /// Whether an item with the given completion flag belongs to this filter
    pub fn admits(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !completed,
            Self::Done => completed,
        }
    }

    /// Next filter in tab order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Done,
            Self::Done => Self::All,
        }
    }

    /// Position in the filter control (tabs and dropdown share the order)
    pub fn index(&self) -> usize {
        match self {
            Self::All => 0,
            Self::Pending => 1,
            Self::Done => 2,
        }
    }

    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Pending, Filter::Done]
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown filter '{s}' (expected all, pending or done)"))
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Typing into the new-item input, navigating the list
    Normal,
    /// Inline edit of one item
    Editing,
    /// Filter dropdown open (narrow layout only)
    FilterDropdown,
    /// Search overlay focused
    Search,
    /// Blocking message, any key dismisses
    Alert,
}
