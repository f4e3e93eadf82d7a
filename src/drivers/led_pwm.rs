//! PWM LED channels and the duty-cycle mapping policy.
//!
//! Red and blue share PWM slice 6 (GPIO13 = channel B, GPIO12 = channel A),
//! clocked with an integer divider of 40 and a wrap of 500.

use embedded_hal::PwmPin;
use rp_pico::hal::gpio::bank0::{Gpio12, Gpio13};
use rp_pico::hal::gpio::{FunctionNull, Pin, PullDown};
use rp_pico::hal::pwm::{FreeRunning, Pwm6, Slice};

use crate::config::{ADC_MAX, DEAD_ZONE_HALF_WIDTH, DEAD_ZONE_LOW_PASS, PWM_DIV_INT, PWM_PERIOD};
use crate::drivers::joystick::AxisSample;

/// Linear scale from the raw ADC domain to [0, period].
pub fn duty_from_raw(raw: u16, period: u16) -> u16 {
    (u32::from(raw) * u32::from(period) / u32::from(ADC_MAX)) as u16
}

/// Dead-zone suppression around the resting midpoint.
///
/// A scaled value passes through when it sits clear of the midpoint band,
/// or when it is near zero; otherwise it is forced to 0 so the LEDs stay
/// dark while the stick rests centered. The near-zero clause overlaps the
/// suppression band; it is kept as-is, matching the deployed policy.
pub fn dead_zone(duty: u16, period: u16) -> u16 {
    let center = period / 2;
    let centered = if duty > center { duty - center } else { center - duty };
    if centered > DEAD_ZONE_HALF_WIDTH || duty < DEAD_ZONE_LOW_PASS {
        duty
    } else {
        0
    }
}

/// Map one sample to the (red, blue) duty pair: red follows x, blue y.
pub fn duty_levels(sample: AxisSample, period: u16) -> (u16, u16) {
    (
        dead_zone(duty_from_raw(sample.x, period), period),
        dead_zone(duty_from_raw(sample.y, period), period),
    )
}

/// The two PWM-driven LED channels.
pub struct LedChannels {
    slice: Slice<Pwm6, FreeRunning>,
}

impl LedChannels {
    pub fn new(
        mut slice: Slice<Pwm6, FreeRunning>,
        blue: Pin<Gpio12, FunctionNull, PullDown>,
        red: Pin<Gpio13, FunctionNull, PullDown>,
    ) -> Self {
        slice.set_div_int(PWM_DIV_INT);
        slice.set_div_frac(0);
        slice.set_top(PWM_PERIOD);
        slice.channel_a.output_to(blue);
        slice.channel_b.output_to(red);
        slice.enable();
        Self { slice }
    }

    /// Apply duty levels to both channels.
    pub fn set_levels(&mut self, red: u16, blue: u16) {
        self.slice.channel_b.set_duty(red);
        self.slice.channel_a.set_duty(blue);
    }
}
