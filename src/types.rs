use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable time window of one stylist. Two slots are the same booking
/// target iff stylist, start and end all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    stylist_id: Uuid,
}

impl Slot {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, stylist_id: Uuid) -> Self {
        Self {
            start,
            end,
            stylist_id,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn stylist_id(&self) -> Uuid {
        self.stylist_id
    }

    /// Construction accepts any pair of timestamps; adapters use this to
    /// turn away windows that end before they start.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub slot: Slot,
    pub client_id: Uuid,
}

impl AppointmentRequest {
    pub fn new(slot: Slot, client_id: Uuid) -> Self {
        Self { slot, client_id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    slot: Slot,
    client_id: Uuid,
}

impl Appointment {
    pub fn new(slot: Slot, client_id: Uuid) -> Self {
        Self { slot, client_id }
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }
}

/// Outcome of a booking attempt. `appointment` is present iff `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    success: bool,
    appointment: Option<Appointment>,
}

impl AppointmentResponse {
    pub fn booked(appointment: Appointment) -> Self {
        Self {
            success: true,
            appointment: Some(appointment),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: false,
            appointment: None,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn appointment(&self) -> Option<&Appointment> {
        self.appointment.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stylist {
    pub id: Uuid,
    pub name: String,
}

impl Stylist {
    /// Ids are derived from the name so they stay stable across restarts.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
            name,
        }
    }
}
