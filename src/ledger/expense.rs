use serde::{Deserialize, Serialize};

use super::date::CalendarDate;

/// Fixed spending categories. The declaration order doubles as the wire
/// encoding, so reordering variants breaks existing data files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    LearningSupplies,
    DailyNecessities,
    Transportation,
    Food,
    Other,
}

impl Category {
    /// All categories in declaration (wire) order.
    pub const ALL: [Category; 5] = [
        Category::LearningSupplies,
        Category::DailyNecessities,
        Category::Transportation,
        Category::Food,
        Category::Other,
    ];

    /// Stable wire index used by the data file.
    pub fn index(self) -> u32 {
        match self {
            Category::LearningSupplies => 0,
            Category::DailyNecessities => 1,
            Category::Transportation => 2,
            Category::Food => 3,
            Category::Other => 4,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Category::ALL.get(index as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::LearningSupplies => "Learning supplies",
            Category::DailyNecessities => "Daily necessities",
            Category::Transportation => "Transportation",
            Category::Food => "Food",
            Category::Other => "Other",
        }
    }

    /// Label for a raw wire index, with a fallback for out-of-range values.
    /// Only diagnostics print the fallback; records never hold one.
    pub fn label_for_index(index: u32) -> &'static str {
        Category::from_index(index)
            .map(Category::label)
            .unwrap_or("unknown category")
    }

    /// Accepts either a display label (case-insensitive) or a bare wire
    /// index. The data file stores indices while the shell echoes labels.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim();
        if let Ok(index) = needle.parse::<u32>() {
            return Category::from_index(index);
        }
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: u32,
    pub amount: f64,
    pub category: Category,
    pub date: CalendarDate,
    pub remarks: String,
}

impl Expense {
    pub fn new(
        id: u32,
        amount: f64,
        category: Category,
        date: CalendarDate,
        remarks: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            category,
            date,
            remarks: remarks.into(),
        }
    }
}
