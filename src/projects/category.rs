use std::fmt;

/// Server-recognized filter for the project listing.
///
/// The set is closed and its order is the order shown in the selector.
/// The first entry is the category fetched on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Static,
    Responsive,
    Dynamic,
    React,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Static,
        Category::Responsive,
        Category::Dynamic,
        Category::React,
    ];

    /// Value sent as the `category` query parameter.
    pub fn id(self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Static => "STATIC",
            Category::Responsive => "RESPONSIVE",
            Category::Dynamic => "DYNAMIC",
            Category::React => "REACT",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Static => "Static",
            Category::Responsive => "Responsive",
            Category::Dynamic => "Dynamic",
            Category::React => "React",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }

    /// Category at a zero-based selector position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
