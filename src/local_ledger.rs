use crate::{ledger::BookingLedger, types::Slot};
use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex, PoisonError, RwLock},
};
use tracing::debug;
use uuid::Uuid;

/// One set of bookings shared by every stylist, behind a single lock.
#[derive(Debug, Clone, Default)]
pub struct GlobalLedger {
    slots: Arc<Mutex<HashSet<(Uuid, Slot)>>>,
}

impl BookingLedger for GlobalLedger {
    fn is_booked(&self, stylist_id: Uuid, slot: &Slot) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&(stylist_id, slot.clone()))
    }

    fn book(&self, stylist_id: Uuid, slot: Slot) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((stylist_id, slot));
    }

    fn reserve(&self, stylist_id: Uuid, slot: Slot) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let key = (stylist_id, slot);
        if slots.contains(&key) {
            debug!(%stylist_id, "Slot already present in global ledger");
            return false;
        }
        slots.insert(key);
        true
    }

    fn booked_slots(&self, stylist_id: Uuid) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(id, _)| *id == stylist_id)
            .map(|(_, slot)| slot.clone())
            .collect();
        sort_by_start(&mut slots);
        slots
    }
}

type Bucket = Arc<Mutex<HashSet<Slot>>>;

/// Bookings partitioned by stylist. Each stylist's bucket has its own lock,
/// so bookings for different stylists never wait on each other.
#[derive(Debug, Clone, Default)]
pub struct StylistLedger {
    buckets: Arc<RwLock<HashMap<Uuid, Bucket>>>,
}

impl StylistLedger {
    fn bucket(&self, stylist_id: Uuid) -> Option<Bucket> {
        self.buckets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&stylist_id)
            .cloned()
    }

    fn bucket_or_create(&self, stylist_id: Uuid) -> Bucket {
        if let Some(bucket) = self.bucket(stylist_id) {
            return bucket;
        }
        self.buckets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(stylist_id)
            .or_insert_with(|| {
                debug!(%stylist_id, "Creating ledger bucket");
                Bucket::default()
            })
            .clone()
    }
}

impl BookingLedger for StylistLedger {
    fn is_booked(&self, stylist_id: Uuid, slot: &Slot) -> bool {
        match self.bucket(stylist_id) {
            Some(bucket) => bucket
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(slot),
            None => false,
        }
    }

    fn book(&self, stylist_id: Uuid, slot: Slot) {
        self.bucket_or_create(stylist_id)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot);
    }

    fn reserve(&self, stylist_id: Uuid, slot: Slot) -> bool {
        let bucket = self.bucket_or_create(stylist_id);
        let mut slots = bucket.lock().unwrap_or_else(PoisonError::into_inner);
        if slots.contains(&slot) {
            debug!(%stylist_id, "Slot already present in stylist bucket");
            return false;
        }
        slots.insert(slot);
        true
    }

    fn booked_slots(&self, stylist_id: Uuid) -> Vec<Slot> {
        let mut slots: Vec<Slot> = match self.bucket(stylist_id) {
            Some(bucket) => bucket
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .iter()
                .cloned()
                .collect(),
            None => vec![],
        };
        sort_by_start(&mut slots);
        slots
    }
}

fn sort_by_start(slots: &mut [Slot]) {
    slots.sort_unstable_by(|a, b| a.start().cmp(&b.start()).then(a.end().cmp(&b.end())));
}
