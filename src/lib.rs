//! Joystick panel firmware for the Raspberry Pi Pico.
//!
//! A fixed-cadence control loop samples a two-axis analog joystick, maps
//! the readings onto two PWM LED channels under a dead-zone policy, and
//! renders a cursor plus a selectable border on a 128x64 SSD1306. Button
//! presses arrive as falling-edge interrupts, are debounced per source,
//! and mutate the shared mode flags the loop reads.

#![no_std]

pub mod application;
pub mod config;
pub mod drivers;
pub mod fault;
pub mod state;
pub mod testing;

pub use application::Application;
pub use fault::Fault;
pub use state::{BorderStyle, EventSource, PanelState, PANEL_STATE};
