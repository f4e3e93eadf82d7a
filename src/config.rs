//! Configuration constants for the joystick panel firmware

/// I2C bus rate for the display
pub const I2C_FREQ_HZ: u32 = 400_000;

/// PWM clock divider (integer part) for the LED slice
pub const PWM_DIV_INT: u8 = 40;

/// PWM wrap value; duty levels live in [0, PWM_PERIOD]
pub const PWM_PERIOD: u16 = 500;

/// Top of the ADC dynamic range (12-bit)
pub const ADC_MAX: u16 = 4095;

/// ADC settle time after selecting a channel, in milliseconds
pub const ADC_SETTLE_MS: u32 = 2;

/// Half-width of the dead zone around the PWM midpoint
pub const DEAD_ZONE_HALF_WIDTH: u16 = 30;

/// Scaled values below this pass through the dead zone untouched
pub const DEAD_ZONE_LOW_PASS: u16 = 25;

/// Button debounce window in microseconds
pub const DEBOUNCE_WINDOW_US: u32 = 200_000;

/// Control loop pacing delay in milliseconds
pub const LOOP_DELAY_MS: u32 = 10;

/// Cursor square edge length in pixels
pub const CURSOR_SIZE: u32 = 8;

/// Largest cursor x coordinate on the 128-wide display
pub const CURSOR_MAX_X: u16 = 119;

/// Largest cursor y coordinate on the 64-high display
pub const CURSOR_MAX_Y: u16 = 54;

/// Number of selectable border styles
pub const BORDER_STYLE_COUNT: u8 = 5;
