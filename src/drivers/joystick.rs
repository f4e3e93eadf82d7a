//! Two-axis analog joystick sampler.
//!
//! Generic over the `embedded-hal` one-shot ADC so the panel logic is not
//! tied to the RP2040 peripheral type.

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use nb::block;

use crate::config::ADC_SETTLE_MS;
use crate::fault::Fault;

/// One raw reading per axis, each in [0, 4095].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, defmt::Format)]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

/// Joystick sampler owning the ADC and both channel pins.
pub struct Joystick<ADC, A, X, Y> {
    adc: A,
    x_pin: X,
    y_pin: Y,
    _adc: PhantomData<ADC>,
}

impl<ADC, A, X, Y> Joystick<ADC, A, X, Y>
where
    A: OneShot<ADC, u16, X> + OneShot<ADC, u16, Y>,
    X: Channel<ADC>,
    Y: Channel<ADC>,
{
    pub fn new(adc: A, x_pin: X, y_pin: Y) -> Self {
        Self {
            adc,
            x_pin,
            y_pin,
            _adc: PhantomData,
        }
    }

    /// Read both axes, letting the mux settle after each channel switch.
    ///
    /// The one-shot interface selects the channel and converts in a single
    /// step, so each axis is converted twice: the first conversion only
    /// moves the mux and is discarded, the settle delay elapses on the
    /// newly selected channel, and the second conversion is the reading
    /// that counts.
    ///
    /// The channels are read crossed: the X-labelled input feeds the `y`
    /// field and vice versa, matching how the stick is mounted relative to
    /// the display. Keep the read order as-is.
    pub fn sample<D: DelayMs<u32>>(&mut self, delay: &mut D) -> Result<AxisSample, Fault> {
        block!(self.adc.read(&mut self.x_pin)).map_err(|_| Fault::Sampler)?;
        delay.delay_ms(ADC_SETTLE_MS);
        let y = block!(self.adc.read(&mut self.x_pin)).map_err(|_| Fault::Sampler)?;

        block!(self.adc.read(&mut self.y_pin)).map_err(|_| Fault::Sampler)?;
        delay.delay_ms(ADC_SETTLE_MS);
        let x = block!(self.adc.read(&mut self.y_pin)).map_err(|_| Fault::Sampler)?;

        Ok(AxisSample { x, y })
    }
}
