use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc,
};

use uuid::Uuid;

use crate::{ledger::BookingLedger, types::Slot};

pub struct MockBookingLedgerInner {
    pub booked: AtomicBool,
    pub calls_to_is_booked: AtomicU64,
    pub calls_to_book: AtomicU64,
    pub calls_to_reserve: AtomicU64,
    pub calls_to_booked_slots: AtomicU64,
    pub mutations: AtomicU64,
}

#[derive(Clone)]
pub struct MockBookingLedger(pub Arc<MockBookingLedgerInner>);

impl MockBookingLedgerInner {
    fn new() -> Self {
        Self {
            booked: AtomicBool::new(false),
            calls_to_is_booked: AtomicU64::default(),
            calls_to_book: AtomicU64::default(),
            calls_to_reserve: AtomicU64::default(),
            calls_to_booked_slots: AtomicU64::default(),
            mutations: AtomicU64::default(),
        }
    }
}

impl MockBookingLedger {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingLedgerInner::new()))
    }

    pub fn total_calls(&self) -> u64 {
        self.0.calls_to_is_booked.load(Ordering::SeqCst)
            + self.0.calls_to_book.load(Ordering::SeqCst)
            + self.0.calls_to_reserve.load(Ordering::SeqCst)
            + self.0.calls_to_booked_slots.load(Ordering::SeqCst)
    }
}

impl BookingLedger for MockBookingLedger {
    fn is_booked(&self, _stylist_id: Uuid, _slot: &Slot) -> bool {
        self.0.calls_to_is_booked.fetch_add(1, Ordering::SeqCst);
        self.0.booked.load(Ordering::SeqCst)
    }

    fn book(&self, _stylist_id: Uuid, _slot: Slot) {
        self.0.calls_to_book.fetch_add(1, Ordering::SeqCst);
        self.0.mutations.fetch_add(1, Ordering::SeqCst);
    }

    fn reserve(&self, _stylist_id: Uuid, _slot: Slot) -> bool {
        self.0.calls_to_reserve.fetch_add(1, Ordering::SeqCst);
        if self.0.booked.load(Ordering::SeqCst) {
            return false;
        }
        self.0.mutations.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn booked_slots(&self, _stylist_id: Uuid) -> Vec<Slot> {
        self.0.calls_to_booked_slots.fetch_add(1, Ordering::SeqCst);
        vec![]
    }
}
