pub mod display;
pub mod joystick;
pub mod led_pwm;

pub use display::{cursor_position, Panel, PixelPosition};
pub use joystick::{AxisSample, Joystick};
pub use led_pwm::{duty_levels, LedChannels};
