use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tracked asset: a human-facing name and the provider symbol.
///
/// The list of tracked assets is supplied by the caller; the engine
/// only consumes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSpec {
    pub display_name: String,
    pub symbol: String,
}

impl AssetSpec {
    pub fn new(display_name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Percentage change per horizon. `None` means the horizon is not
/// computable for this asset yet (e.g. newly listed), which renderers
/// show as "N/A".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    pub day: Option<Decimal>,
    pub week: Option<Decimal>,
    pub month: Option<Decimal>,
    pub three_months: Option<Decimal>,
    pub six_months: Option<Decimal>,
    pub year: Option<Decimal>,
    pub ytd: Option<Decimal>,
}

/// A successfully assembled per-asset result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub display_name: String,
    pub symbol: String,
    pub current_price: Decimal,
    pub ath: Decimal,
    pub pct_from_ath: Decimal,
    pub changes: ChangeSet,
}

/// The unit handed to the report renderer, one per tracked asset, in
/// input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetReport {
    Snapshot(AssetSnapshot),
    Failed {
        display_name: String,
        symbol: String,
        error: String,
    },
}

impl AssetReport {
    pub fn display_name(&self) -> &str {
        match self {
            AssetReport::Snapshot(snapshot) => &snapshot.display_name,
            AssetReport::Failed { display_name, .. } => display_name,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            AssetReport::Snapshot(snapshot) => &snapshot.symbol,
            AssetReport::Failed { symbol, .. } => symbol,
        }
    }
}
