//! This module defines the domain data types.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::Error;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;

/// Whether a transaction brought money in or spent it.
///
/// The type determines the sign of a transaction in every aggregation: income
/// adds to the balance, expenses count towards category spending. Amounts
/// themselves are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned, e.g. salary.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(FromSqlError::Other(
                format!("unknown transaction type {other:?}").into(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store on creation.
    pub id: DatabaseID,
    /// The amount of money spent or earned, always greater than zero.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The ID of a category from the [registry](crate::category::CATEGORIES).
    ///
    /// Not enforced as a foreign key: a transaction may reference a category
    /// ID that is no longer in the registry.
    pub category: String,
    /// When the transaction happened. Distinct from `created_at`, which
    /// records when the row was inserted.
    pub date: Date,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the record was created. Set by the store, not business data.
    pub created_at: OffsetDateTime,
    /// When the record was last modified. Set by the store, not business data.
    pub updated_at: OffsetDateTime,
}

/// The client-supplied fields for creating or updating a transaction.
///
/// An update replaces all five fields, there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionData {
    /// The amount of money spent or earned, must be greater than zero.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The ID of a category from the [registry](crate::category::CATEGORIES).
    pub category: String,
    /// When the transaction happened.
    pub date: Date,
    /// Whether this transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl TransactionData {
    /// Check the invariants that the stores rely on.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is zero or negative, or
    /// [Error::EmptyDescription] if the description is empty or whitespace.
    pub fn validate(&self) -> Result<(), Error> {
        if self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        if self.description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(())
    }
}

/// How often a budget allocation resets.
///
/// Only monthly budgets are currently supported, but the period is stored so
/// that existing rows remain valid if other periods are added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// The allocation applies to a single calendar month.
    Monthly,
}

impl BudgetPeriod {
    /// The lowercase name used on the wire and in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
        }
    }
}

impl ToSql for BudgetPeriod {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for BudgetPeriod {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "monthly" => Ok(Self::Monthly),
            other => Err(FromSqlError::Other(
                format!("unknown budget period {other:?}").into(),
            )),
        }
    }
}

/// A spending ceiling for one category in one calendar month.
///
/// At most one budget exists per `(category, month, year)` triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The ID of the budget, assigned by the store on creation.
    pub id: DatabaseID,
    /// The ID of the category this budget limits.
    pub category: String,
    /// The allocation ceiling, always greater than zero.
    pub amount: f64,
    /// The calendar month this budget applies to (1-12).
    pub month: u8,
    /// The calendar year this budget applies to.
    pub year: i32,
    /// How often the allocation resets.
    pub period: BudgetPeriod,
    /// How much has been spent against this budget.
    ///
    /// Never stored: recomputed on every read as the sum of expense
    /// transactions in the budget's category and month.
    pub spent: f64,
    /// When the record was created. Set by the store, not business data.
    pub created_at: OffsetDateTime,
    /// When the record was last modified. Set by the store, not business data.
    pub updated_at: OffsetDateTime,
}

/// The client-supplied fields for creating a budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetData {
    /// The ID of the category to limit.
    pub category: String,
    /// The allocation ceiling, must be greater than zero.
    pub amount: f64,
    /// The calendar month the budget applies to (1-12).
    pub month: u8,
    /// The calendar year the budget applies to.
    pub year: i32,
}

impl BudgetData {
    /// Check the invariants that the stores rely on.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is zero or negative, or
    /// [Error::InvalidMonth] if the month is outside 1-12.
    pub fn validate(&self) -> Result<(), Error> {
        if self.amount <= 0.0 {
            return Err(Error::InvalidAmount(self.amount));
        }

        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidMonth(self.month));
        }

        Ok(())
    }
}
