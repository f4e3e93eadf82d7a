//! Mode flags shared between the button interrupt handler and the control
//! loop.
//!
//! Every field is an independent atomic: the RP2040 core has no
//! compare-and-swap on thumbv6m, so updates are plain load/store pairs.
//! That is sound here because only the interrupt handler writes and the
//! loop tolerates reading a value that is one tick stale.

use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::config::{BORDER_STYLE_COUNT, DEBOUNCE_WINDOW_US};

/// Decorative frame drawn around the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum BorderStyle {
    None,
    Outline,
    Bars,
    HLines,
    VLines,
}

impl BorderStyle {
    pub fn from_index(index: u8) -> Self {
        match index % BORDER_STYLE_COUNT {
            1 => BorderStyle::Outline,
            2 => BorderStyle::Bars,
            3 => BorderStyle::HLines,
            4 => BorderStyle::VLines,
            _ => BorderStyle::None,
        }
    }
}

/// Debounced trigger sources, one debounce clock each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum EventSource {
    /// Button A: flips PWM gating.
    ModeToggle = 0,
    /// Joystick button: green LED + border style.
    BorderCycle = 1,
    /// Button B: wired and debounced, no action bound.
    Spare = 2,
}

/// Shared panel state, written by the IRQ handler and read by the loop.
pub struct PanelState {
    pwm_enabled: AtomicBool,
    green_led_on: AtomicBool,
    border_index: AtomicU8,
    last_accept_us: [AtomicU32; 3],
}

/// The one instance shared between execution contexts.
pub static PANEL_STATE: PanelState = PanelState::new();

impl PanelState {
    pub const fn new() -> Self {
        Self {
            pwm_enabled: AtomicBool::new(true),
            green_led_on: AtomicBool::new(false),
            border_index: AtomicU8::new(0),
            last_accept_us: [AtomicU32::new(0), AtomicU32::new(0), AtomicU32::new(0)],
        }
    }

    /// Debounce gate: accepts the event and records its timestamp iff the
    /// source has been quiet for the full window. Timestamps are wrapping
    /// microseconds, so the comparison stays valid across the u32 wrap.
    ///
    /// Stamps start at zero, which absorbs edges in the first 200 ms after
    /// reset.
    pub fn accept(&self, source: EventSource, now_us: u32) -> bool {
        let slot = &self.last_accept_us[source as usize];
        let last = slot.load(Ordering::Relaxed);
        if now_us.wrapping_sub(last) > DEBOUNCE_WINDOW_US {
            slot.store(now_us, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Relaxed)
    }

    /// IRQ context only; load/store is not atomic as a pair.
    pub fn toggle_pwm(&self) -> bool {
        let enabled = !self.pwm_enabled.load(Ordering::Relaxed);
        self.pwm_enabled.store(enabled, Ordering::Relaxed);
        enabled
    }

    #[inline]
    pub fn green_led_on(&self) -> bool {
        self.green_led_on.load(Ordering::Relaxed)
    }

    /// IRQ context only.
    pub fn toggle_green(&self) -> bool {
        let on = !self.green_led_on.load(Ordering::Relaxed);
        self.green_led_on.store(on, Ordering::Relaxed);
        on
    }

    #[inline]
    pub fn border_style(&self) -> BorderStyle {
        BorderStyle::from_index(self.border_index.load(Ordering::Relaxed))
    }

    /// IRQ context only. Wraps back to the styleless frame after the last
    /// variant.
    pub fn advance_border(&self) -> BorderStyle {
        let next = (self.border_index.load(Ordering::Relaxed) + 1) % BORDER_STYLE_COUNT;
        self.border_index.store(next, Ordering::Relaxed);
        BorderStyle::from_index(next)
    }
}
