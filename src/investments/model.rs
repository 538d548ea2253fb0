use serde::{Deserialize, Serialize};

/// One user's portfolio snapshot as served by the investments service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHoldings {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Snapshot date, ISO `YYYY-MM-DD`. Carried through to the export untouched.
    pub date: String,
    /// Total amount invested across all holdings.
    pub investment_total: f64,
    pub holdings: Vec<Holding>,
}

/// A single (company, share of the total) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Company id, resolved through a [`CompanyIndex`](crate::CompanyIndex).
    pub id: String,
    /// Fraction of `investment_total` placed in this company. Not checked to sum to 1.
    pub investment_percentage: f64,
}

impl UserHoldings {
    /// Each holding paired with its monetary value, in holding order.
    pub fn holding_values(&self) -> impl Iterator<Item = (&Holding, f64)> + '_ {
        self.holdings.iter().map(|h| (h, h.value_of(self.investment_total)))
    }
}

impl Holding {
    /// `total * investment_percentage`, unrounded.
    pub fn value_of(&self, total: f64) -> f64 {
        total * self.investment_percentage
    }
}
