use serde::Serialize;

/// Initial-setup profile submitted after signup: interests, region, and
/// welfare eligibility details used to personalize recommendations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Interest categories picked during initial setup.
    pub categories: Vec<String>,

    pub region: Region,

    pub welfare_info: WelfareInfo,
}

/// The user's registered administrative region.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub city: String,
    pub district: String,
    pub dong: String,
}

/// Welfare eligibility details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelfareInfo {
    pub disability: bool,

    /// Income bracket code, e.g. `basic_livelihood`.
    pub income_level: String,
}
