use crate::types::Slot;
use uuid::Uuid;

/// The authoritative record of booked slots. Handles are cheap to clone and
/// every clone observes the same bookings.
pub trait BookingLedger: Clone + Send + Sync + 'static {
    fn is_booked(&self, stylist_id: Uuid, slot: &Slot) -> bool;
    /// Records the slot whether or not it is already booked.
    fn book(&self, stylist_id: Uuid, slot: Slot);
    /// Books the slot unless it is taken, as one critical section. Returns
    /// `false` without touching the ledger when the slot was already booked.
    fn reserve(&self, stylist_id: Uuid, slot: Slot) -> bool;
    fn booked_slots(&self, stylist_id: Uuid) -> Vec<Slot>;
}
