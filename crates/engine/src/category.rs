//! Expense categories.

use core::fmt;

/// Category of an expense.
///
/// The five fixed labels are variants, any other label is carried by
/// [`Category::Other`]. Numeric menu codes only exist at the input boundary
/// (see [`crate::resolve_category`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Bills,
    Transport,
    Entertainment,
    Shopping,
    Other(String),
}

impl Category {
    /// Menu entries offered to the user, in selection order (1-based).
    ///
    /// The last entry asks for a custom label.
    pub const MENU: [(u8, &'static str); 6] = [
        (1, "Food"),
        (2, "Bills"),
        (3, "Transport"),
        (4, "Entertainment"),
        (5, "Shopping"),
        (6, "Other"),
    ];

    /// Selection code that asks for a custom label.
    pub const OTHER_SELECTION: u8 = 6;

    /// Maps a label to its variant; unknown labels become `Other`.
    ///
    /// Matching is exact, `"food"` is a custom label.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Food" => Category::Food,
            "Bills" => Category::Bills,
            "Transport" => Category::Transport,
            "Entertainment" => Category::Entertainment,
            "Shopping" => Category::Shopping,
            other => Category::Other(other.to_string()),
        }
    }

    /// Returns the fixed category for selection codes 1 to 5.
    #[must_use]
    pub fn fixed(selection: u8) -> Option<Self> {
        match selection {
            1 => Some(Category::Food),
            2 => Some(Category::Bills),
            3 => Some(Category::Transport),
            4 => Some(Category::Entertainment),
            5 => Some(Category::Shopping),
            _ => None,
        }
    }

    /// Text stored in the category column.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Bills => "Bills",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Other(label) => label,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
