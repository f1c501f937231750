//! The static category registry.
//!
//! Categories are fixed reference data shared by every user, not rows in the
//! database. Transactions store a category ID as plain text, so a transaction
//! can outlive its category; lookups fall back to a neutral color for IDs
//! that are no longer in the registry.

use serde::Serialize;

/// The fallback color for category IDs that are not in the registry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#8395A7";

/// The fallback icon for category IDs that are not in the registry.
pub const DEFAULT_CATEGORY_ICON: &str = "📦";

/// The ID of the category used for income transactions.
///
/// Income is a category like any other so that income transactions can be
/// labelled in lists, but it is excluded from expense charts.
pub const INCOME_CATEGORY: &str = "income";

/// A label for grouping transactions, with its display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// The stable identifier stored on transactions and budgets.
    pub id: &'static str,
    /// The human readable name.
    pub name: &'static str,
    /// The emoji glyph shown next to the name.
    pub icon: &'static str,
    /// The hex color used in charts.
    pub color: &'static str,
}

/// Every category known to the application, in display order.
///
/// The declared order doubles as the tie-break order for the category
/// breakdown: categories with equal spending keep this order.
pub const CATEGORIES: [Category; 10] = [
    Category {
        id: "food",
        name: "Food & Dining",
        icon: "🍕",
        color: "#FF6B6B",
    },
    Category {
        id: "transport",
        name: "Transportation",
        icon: "🚗",
        color: "#4ECDC4",
    },
    Category {
        id: "shopping",
        name: "Shopping",
        icon: "🛍️",
        color: "#45B7D1",
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        icon: "🎬",
        color: "#96CEB4",
    },
    Category {
        id: "bills",
        name: "Bills & Utilities",
        icon: "⚡",
        color: "#FECA57",
    },
    Category {
        id: "healthcare",
        name: "Healthcare",
        icon: "⚕️",
        color: "#FF9FF3",
    },
    Category {
        id: "education",
        name: "Education",
        icon: "📚",
        color: "#54A0FF",
    },
    Category {
        id: "travel",
        name: "Travel",
        icon: "✈️",
        color: "#5F27CD",
    },
    Category {
        id: INCOME_CATEGORY,
        name: "Income",
        icon: "💰",
        color: "#00D2D3",
    },
    Category {
        id: "other",
        name: "Other",
        icon: "📦",
        color: "#8395A7",
    },
];

/// Look up a category by its ID.
pub fn get_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// The chart color for a category ID, falling back to
/// [DEFAULT_CATEGORY_COLOR] for unknown IDs.
pub fn category_color(id: &str) -> &'static str {
    get_category(id).map_or(DEFAULT_CATEGORY_COLOR, |category| category.color)
}
