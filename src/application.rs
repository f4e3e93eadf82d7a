//! Application layer: one control-loop tick from sample to frame.

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use ssd1306::prelude::WriteOnlyDataCommand;

use crate::config::PWM_PERIOD;
use crate::drivers::{cursor_position, duty_levels, AxisSample, Joystick, LedChannels, Panel};
use crate::state::PanelState;

/// Control-loop state carried across ticks.
pub struct Application {
    last_sample: AxisSample,
}

impl Application {
    pub fn new() -> Self {
        Self {
            last_sample: AxisSample::default(),
        }
    }

    /// Run one tick: sample both axes, drive the PWM LEDs, redraw the
    /// cursor and border, and push the frame out.
    ///
    /// Recoverable faults never stop the loop: a failed sample falls back
    /// to the previous tick's reading, a failed transmit drops the frame.
    pub fn tick<ADC, A, X, Y, D, DI>(
        &mut self,
        joystick: &mut Joystick<ADC, A, X, Y>,
        delay: &mut D,
        leds: &mut LedChannels,
        panel: &mut Panel<DI>,
        state: &PanelState,
    ) where
        A: OneShot<ADC, u16, X> + OneShot<ADC, u16, Y>,
        X: Channel<ADC>,
        Y: Channel<ADC>,
        D: DelayMs<u32>,
        DI: WriteOnlyDataCommand,
    {
        let sample = match joystick.sample(delay) {
            Ok(sample) => {
                self.last_sample = sample;
                sample
            }
            Err(fault) => {
                defmt::warn!("{}: reusing previous sample", fault);
                self.last_sample
            }
        };

        let (red, blue) = duty_levels(sample, PWM_PERIOD);
        if state.pwm_enabled() {
            leds.set_levels(red, blue);
        }

        panel.render(state.border_style(), cursor_position(sample));
        if let Err(fault) = panel.flush() {
            defmt::warn!("{}: frame dropped", fault);
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
