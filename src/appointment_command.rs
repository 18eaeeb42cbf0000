use crate::{
    error::BookingError,
    ledger::BookingLedger,
    types::{Appointment, AppointmentRequest, AppointmentResponse},
};
use tracing::{info, warn};

/// Entry point for booking a slot. Clones share the same ledger.
#[derive(Debug, Clone)]
pub struct CreateAppointmentCommand<L> {
    ledger: L,
}

impl<L: BookingLedger> CreateAppointmentCommand<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Books the requested slot for the client.
    ///
    /// A slot that is already taken yields `Ok` with a rejected response and
    /// leaves the ledger untouched. Only a missing request is an error, and it
    /// is reported before the ledger is consulted.
    pub fn execute(
        &self,
        request: impl Into<Option<AppointmentRequest>>,
    ) -> Result<AppointmentResponse, BookingError> {
        let AppointmentRequest { slot, client_id } = request
            .into()
            .ok_or(BookingError::InvalidArgument("appointment request is missing"))?;
        let stylist_id = slot.stylist_id();

        if !self.ledger.reserve(stylist_id, slot.clone()) {
            warn!(
                %stylist_id,
                %client_id,
                start = %slot.start(),
                end = %slot.end(),
                "Slot was already booked"
            );
            return Ok(AppointmentResponse::rejected());
        }

        info!(
            %stylist_id,
            %client_id,
            start = %slot.start(),
            end = %slot.end(),
            "Appointment booked"
        );
        Ok(AppointmentResponse::booked(Appointment::new(slot, client_id)))
    }
}
