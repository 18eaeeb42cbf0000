use crate::types::Stylist;
use uuid::Uuid;

/// Resolves stylist ids to their records. Booking never depends on it; the
/// HTTP layer uses it to turn away unknown stylists.
#[cfg_attr(test, mockall::automock)]
pub trait StylistDirectory: Send + Sync + 'static {
    fn stylist(&self, id: Uuid) -> Option<Stylist>;
    fn stylists(&self) -> Vec<Stylist>;
}
