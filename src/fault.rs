//! Fault taxonomy for peripheral operations

/// Errors surfaced by the drivers.
///
/// `PeripheralInit` is fatal and aborts startup. The other two are
/// recoverable: the control loop reuses the previous sample on `Sampler`
/// and drops the frame on `DisplayTransmit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Fault {
    PeripheralInit,
    Sampler,
    DisplayTransmit,
}
