//! Arbitration between the two country-selection inputs.
//!
//! The country can be chosen from the dropdown or by clicking the map;
//! when both are in play for one event, the click wins. This bridge is
//! stateless — it only decides which value is the source of truth.

/// Reconciles a map-click location with the current dropdown value.
pub struct MapSyncBridge;

impl MapSyncBridge {
    /// The click location when present, otherwise the current dropdown
    /// value unchanged.
    pub fn resolve_country(
        click_location: Option<&str>,
        current_value: Option<&str>,
    ) -> Option<String> {
        click_location.or(current_value).map(str::to_string)
    }
}
