use crate::{Decode, lenient};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Admin dashboard figures. Every count is coerced to a number: the
/// backend sends some of them as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub this_month_count: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub last_month_count: u64,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub pending_count: u64,
    #[serde(default, deserialize_with = "lenient::vec_or_empty")]
    pub monthly_counts: Vec<MonthlyCount>,
    #[serde(default, deserialize_with = "lenient::count_map")]
    pub status_counts: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    #[serde(default, deserialize_with = "lenient::i32_or_zero")]
    pub year: i32,
    #[serde(default, deserialize_with = "lenient::u32_or_zero")]
    pub month: u32,
    #[serde(default, deserialize_with = "lenient::u64_or_zero")]
    pub count: u64,
}

impl Decode for AnalyticsSummary {
    const NAME: &'static str = "analytics summary";
    const ITEM_KEYS: &'static [&'static str] = &["data", "analytics"];
    const FIELD_FALLBACKS: &'static [(&'static str, &'static str)] = &[("total_count", "total")];
}
