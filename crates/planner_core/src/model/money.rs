//! Spending entities: the expense log and the wishlist.

use crate::model::ids::PlannerId;
use crate::model::priority::PriorityLevel;
use crate::model::{require_iso_date, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Expense category taxonomy from the spending form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Utilities,
    Groceries,
    Transport,
    Health,
    Entertainment,
    Clothing,
    Other,
}

impl ExpenseCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Utilities => "Utilities",
            Self::Groceries => "Groceries",
            Self::Transport => "Transport",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Clothing => "Clothing",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "utilities" => Some(Self::Utilities),
            "groceries" => Some(Self::Groceries),
            "transport" => Some(Self::Transport),
            "health" => Some(Self::Health),
            "entertainment" => Some(Self::Entertainment),
            "clothing" => Some(Self::Clothing),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// One logged purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: PlannerId,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub item: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

/// Form input for logging an expense.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub date: String,
    pub item: String,
    pub amount: f64,
    pub category: ExpenseCategory,
}

impl ExpenseDraft {
    /// Validates the draft: date, item and a strictly positive amount.
    pub fn validate(&self, id: PlannerId) -> Result<Expense, ValidationError> {
        require_iso_date(&self.date)?;
        let item = require_text("item", &self.item)?;
        if !(self.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        Ok(Expense {
            id,
            date: self.date.clone(),
            item,
            amount: self.amount,
            category: self.category,
        })
    }
}

/// A wanted item with a purchase flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: PlannerId,
    pub item: String,
    /// Zero when the form left the price blank.
    pub price: f64,
    pub priority: PriorityLevel,
    pub purchased: bool,
}

/// Form input for a wishlist entry; only the item name is required.
#[derive(Debug, Clone)]
pub struct WishlistDraft {
    pub item: String,
    pub price: f64,
    pub priority: PriorityLevel,
}

impl WishlistDraft {
    pub fn validate(&self, id: PlannerId) -> Result<WishlistItem, ValidationError> {
        let item = require_text("item", &self.item)?;
        Ok(WishlistItem {
            id,
            item,
            price: self.price,
            priority: self.priority,
            purchased: false,
        })
    }
}
