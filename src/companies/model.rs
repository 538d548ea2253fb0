use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A financial company as served by the companies service.
///
/// Only `id` is required. The descriptive fields pass through as absent when the
/// upstream record omits them or sends `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Identifier referenced by [`Holding::id`](crate::Holding::id).
    pub id: String,
    /// Display name used in the CSV export.
    pub name: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    /// Firm reference number.
    pub frn: Option<String>,
}

/// Lookup from company id to company display name.
///
/// Built fresh for every export. Later records win over earlier ones with the same id, and
/// a company without a name is kept as a present key with an absent name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyIndex {
    names: HashMap<String, Option<String>>,
}

impl CompanyIndex {
    /// Builds the index from a slice of companies, in input order.
    pub fn from_companies(companies: &[Company]) -> Self {
        let mut names = HashMap::with_capacity(companies.len());
        for company in companies {
            names.insert(company.id.clone(), company.name.clone());
        }
        Self { names }
    }

    /// Name for `id`. `None` both when the id is unknown and when the company has no name;
    /// use [`contains`](Self::contains) to tell them apart.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).and_then(|n| n.as_deref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Inserts or replaces the entry for `id`, returning the previous name if there was one.
    pub fn insert(&mut self, id: impl Into<String>, name: Option<String>) -> Option<Option<String>> {
        self.names.insert(id.into(), name)
    }

    /// Number of distinct company ids.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<Company> for CompanyIndex {
    fn from_iter<I: IntoIterator<Item = Company>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|c| (c.id, c.name)).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CompanyIndex {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

/// Free-function form of [`CompanyIndex::from_companies`].
pub fn get_company_names(companies: &[Company]) -> CompanyIndex {
    CompanyIndex::from_companies(companies)
}
