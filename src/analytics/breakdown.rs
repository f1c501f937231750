//! Per-category expense totals and percentages.

use serde::{Deserialize, Serialize};

use crate::{
    category::CATEGORIES,
    models::{Transaction, TransactionType},
};

/// One category's share of the expenses in the selected window.
///
/// The display name, icon and color are resolved from the
/// [registry](crate::category::CATEGORIES) at aggregation time rather than
/// cached on the transaction, so renamed categories update everywhere at
/// once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    /// The category's registry ID.
    pub category: String,
    /// The category's display name.
    pub name: String,
    /// The category's emoji glyph.
    pub icon: String,
    /// The category's chart color.
    pub color: String,
    /// The sum of the expense amounts in this category.
    pub amount: f64,
    /// The number of expense transactions in this category.
    pub count: usize,
    /// This category's share of the total expenses, 0-100.
    pub percentage: f64,
}

/// Break the expense transactions down by category.
///
/// Income transactions are excluded entirely, even those filed under the
/// `income` category ID, and so are expenses whose category ID is not in the
/// registry. Categories without expenses are dropped rather than emitted as
/// zero rows. Entries are ordered by amount descending; categories with equal
/// amounts keep the registry's declared order.
///
/// When there are no expenses at all, every percentage is defined as 0 and
/// the result is empty.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut entries: Vec<CategorySpending> = CATEGORIES
        .iter()
        .map(|category| {
            let mut amount = 0.0;
            let mut count = 0;

            for transaction in transactions.iter().filter(|transaction| {
                transaction.transaction_type == TransactionType::Expense
                    && transaction.category == category.id
            }) {
                amount += transaction.amount;
                count += 1;
            }

            CategorySpending {
                category: category.id.to_string(),
                name: category.name.to_string(),
                icon: category.icon.to_string(),
                color: category.color.to_string(),
                amount,
                count,
                percentage: 0.0,
            }
        })
        .filter(|entry| entry.amount > 0.0)
        .collect();

    let total_expenses: f64 = entries.iter().map(|entry| entry.amount).sum();

    if total_expenses > 0.0 {
        for entry in &mut entries {
            entry.percentage = entry.amount / total_expenses * 100.0;
        }
    }

    // A stable sort preserves the registry order for equal amounts.
    entries.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    entries
}
