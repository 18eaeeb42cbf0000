use thiserror::Error;

/// Failures signalled out of band. A taken slot is not one of them: it is an
/// ordinary rejected [`AppointmentResponse`](crate::types::AppointmentResponse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}
