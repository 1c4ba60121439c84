use serde::{Deserialize, Serialize};

/// Column order of the shared store file. `Expense` serializes its fields in
/// this order, so the two must stay in sync.
pub const CSV_HEADERS: [&str; 4] = ["date", "amount", "category", "notes"];

/// A single expense row. All fields are kept in their canonical string form
/// (see `validate`), so a record can be written back out byte-for-byte.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Canonical `YYYY-MM-DD`.
    pub date: String,
    /// Canonical positive decimal string, no trailing fractional zeros.
    pub amount: String,
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    pub fn new(date: String, amount: String, category: String, notes: String) -> Self {
        Self {
            date,
            amount,
            category,
            notes,
        }
    }
}
