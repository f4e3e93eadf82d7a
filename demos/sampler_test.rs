//! On-target checks for the joystick sampler's conversion discipline.
//!
//! The sampler is generic over the one-shot ADC, so these tests drive it
//! with a scripted ADC that records every mux move, settle delay and
//! conversion in order.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt_rtt as _;
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use panic_halt as _;
use rp_pico::entry;

use joypanel::drivers::Joystick;
use joypanel::testing::{TestCase, TestError, TestResult, TestRunner};
use joypanel::{check, check_eq};

#[derive(Clone, Copy, PartialEq)]
enum Event {
    Convert(u8),
    Settle,
    None,
}

struct EventLog {
    events: [Event; 8],
    len: usize,
}

impl EventLog {
    const fn new() -> Self {
        Self {
            events: [Event::None; 8],
            len: 0,
        }
    }

    fn push(&mut self, event: Event) {
        if self.len < self.events.len() {
            self.events[self.len] = event;
            self.len += 1;
        }
    }
}

struct ChanX;
struct ChanY;

impl<'a> Channel<ScriptedAdc<'a>> for ChanX {
    type ID = u8;
    fn channel() -> u8 {
        0
    }
}

impl<'a> Channel<ScriptedAdc<'a>> for ChanY {
    type ID = u8;
    fn channel() -> u8 {
        1
    }
}

/// Fake ADC: the first conversion on a channel returns a bogus value (the
/// mux has just moved), every later one returns the settled reading.
struct ScriptedAdc<'a> {
    log: &'a RefCell<EventLog>,
    readings: [[u16; 2]; 2],
    calls: [usize; 2],
}

impl<'a> ScriptedAdc<'a> {
    fn convert(&mut self, chan: usize) -> u16 {
        self.log.borrow_mut().push(Event::Convert(chan as u8));
        let value = self.readings[chan][self.calls[chan].min(1)];
        self.calls[chan] += 1;
        value
    }
}

impl<'a> OneShot<ScriptedAdc<'a>, u16, ChanX> for ScriptedAdc<'a> {
    type Error = ();
    fn read(&mut self, _pin: &mut ChanX) -> nb::Result<u16, Self::Error> {
        Ok(self.convert(0))
    }
}

impl<'a> OneShot<ScriptedAdc<'a>, u16, ChanY> for ScriptedAdc<'a> {
    type Error = ();
    fn read(&mut self, _pin: &mut ChanY) -> nb::Result<u16, Self::Error> {
        Ok(self.convert(1))
    }
}

struct SettleLog<'a>(&'a RefCell<EventLog>);

impl<'a> DelayMs<u32> for SettleLog<'a> {
    fn delay_ms(&mut self, _ms: u32) {
        self.0.borrow_mut().push(Event::Settle);
    }
}

fn run_sampler(log: &RefCell<EventLog>) -> Result<joypanel::drivers::AxisSample, ()> {
    let adc = ScriptedAdc {
        log,
        readings: [[4001, 1234], [4002, 2345]],
        calls: [0; 2],
    };
    let mut joystick = Joystick::new(adc, ChanX, ChanY);
    let mut delay = SettleLog(log);
    joystick.sample(&mut delay).map_err(|_| ())
}

/// Per axis: mux move, settle on the new channel, then the conversion
/// whose value is latched.
struct SettleOrderTest;
impl TestCase for SettleOrderTest {
    fn name(&self) -> &'static str {
        "settle elapses on the selected channel"
    }

    fn run(&self) -> TestResult {
        let log = RefCell::new(EventLog::new());
        if run_sampler(&log).is_err() {
            return TestResult::Fail(TestError::AssertionFailed("sample returned a fault"));
        }

        let expected = [
            Event::Convert(0),
            Event::Settle,
            Event::Convert(0),
            Event::Convert(1),
            Event::Settle,
            Event::Convert(1),
        ];
        let log = log.borrow();
        check_eq!(log.len, expected.len());
        for i in 0..expected.len() {
            check!(log.events[i] == expected[i]);
        }
        TestResult::Pass
    }
}

/// The pre-settle conversion is discarded and the crossed assignment
/// holds: channel 0 (X-labelled) feeds `y`, channel 1 feeds `x`.
struct DiscardAndCrossTest;
impl TestCase for DiscardAndCrossTest {
    fn name(&self) -> &'static str {
        "settled reading lands on the crossed axis"
    }

    fn run(&self) -> TestResult {
        let log = RefCell::new(EventLog::new());
        let sample = match run_sampler(&log) {
            Ok(sample) => sample,
            Err(()) => {
                return TestResult::Fail(TestError::AssertionFailed("sample returned a fault"))
            }
        };
        check_eq!(sample.y, 1234);
        check_eq!(sample.x, 2345);
        TestResult::Pass
    }
}

#[entry]
fn main() -> ! {
    let mut runner = TestRunner::new();
    runner.run_suite("sampler", &[&SettleOrderTest, &DiscardAndCrossTest]);
    runner.print_summary();

    loop {
        cortex_m::asm::wfi();
    }
}
