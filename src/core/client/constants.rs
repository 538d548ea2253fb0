//! Centralized constants for endpoint paths and UA.

pub(crate) const USER_AGENT: &str = concat!("holdings-export/", env!("CARGO_PKG_VERSION"));

/// Company collection, relative to the financial companies base.
pub(crate) const COMPANIES_PATH: &str = "companies";

/// Holdings collection, relative to the investments base.
pub(crate) const INVESTMENTS_PATH: &str = "investments";

/// Export confirmation endpoint, relative to the investments base.
pub(crate) const INVESTMENTS_EXPORT_PATH: &str = "investments/export";
