//! Logistics provider selection rule
//!
//! Placeholder for the route-optimization model: the provider is chosen
//! from the first character of the destination zip code only.

/// Provider selection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Fulfillment provider selected for the order
    pub provider: &'static str,
    /// Estimated delivery window, free text
    pub eta: &'static str,
}

/// Select a fulfillment provider from the destination zip code
///
/// Zip codes starting with '9' route to the west-coast provider; everything
/// else, including an empty zip, falls back to the global provider.
pub fn select_provider(destination_zip: &str) -> Route {
    if destination_zip.starts_with('9') {
        Route {
            provider: "Provider_WestCoast_Optimized",
            eta: "2 days",
        }
    } else {
        Route {
            provider: "Provider_Global_Standard",
            eta: "4-7 days",
        }
    }
}
