#![no_std]
#![no_main]

use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use defmt_rtt as _;
use embedded_hal::digital::v2::OutputPin;
use fugit::RateExtU32;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::adc::AdcPin;
use rp_pico::hal::gpio::bank0::{Gpio11, Gpio22, Gpio5, Gpio6};
use rp_pico::hal::gpio::{FunctionI2C, FunctionSio, Interrupt, Pin, PullDown, PullUp, SioInput, SioOutput};
use rp_pico::hal::pac::interrupt;
use rp_pico::hal::{self, pac, Clock};
use ssd1306::I2CDisplayInterface;

use joypanel::config::{I2C_FREQ_HZ, LOOP_DELAY_MS};
use joypanel::drivers::{Joystick, LedChannels, Panel};
use joypanel::state::EventSource;
use joypanel::{Application, PANEL_STATE};

type ButtonPin<I> = Pin<I, FunctionSio<SioInput>, PullUp>;

/// Everything the button interrupt handler touches. Initialized once during
/// bring-up, then only ever borrowed inside a critical section.
struct ButtonIrqState {
    mode_button: ButtonPin<Gpio5>,
    spare_button: ButtonPin<Gpio6>,
    stick_button: ButtonPin<Gpio22>,
    green_led: Pin<Gpio11, FunctionSio<SioOutput>, PullDown>,
    timer: hal::Timer,
}

static BUTTON_IRQ: Mutex<RefCell<Option<ButtonIrqState>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());
    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    let sio = hal::Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    defmt::info!("joypanel starting");

    // Joystick on ADC0/ADC1
    let adc = hal::Adc::new(pac.ADC, &mut pac.RESETS);
    let x_pin = AdcPin::new(pins.gpio26.into_floating_input());
    let y_pin = AdcPin::new(pins.gpio27.into_floating_input());
    let mut joystick = Joystick::new(adc, x_pin, y_pin);

    // Red and blue LEDs share PWM slice 6
    let pwm_slices = hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
    let mut leds = LedChannels::new(pwm_slices.pwm6, pins.gpio12, pins.gpio13);

    // SSD1306 on I2C1
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = hal::I2C::i2c1(
        pac.I2C1,
        sda,
        scl,
        I2C_FREQ_HZ.Hz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let mut panel = Panel::new(I2CDisplayInterface::new(i2c));
    panel.init().unwrap();

    // Buttons fire falling-edge interrupts; the green LED is driven from
    // the handler, so it moves into the shared state alongside them.
    let mode_button = pins.gpio5.into_pull_up_input();
    let spare_button = pins.gpio6.into_pull_up_input();
    let stick_button = pins.gpio22.into_pull_up_input();
    mode_button.set_interrupt_enabled(Interrupt::EdgeLow, true);
    spare_button.set_interrupt_enabled(Interrupt::EdgeLow, true);
    stick_button.set_interrupt_enabled(Interrupt::EdgeLow, true);

    let mut green_led = pins.gpio11.into_push_pull_output();
    green_led.set_low().ok();

    cortex_m::interrupt::free(|cs| {
        BUTTON_IRQ.borrow(cs).replace(Some(ButtonIrqState {
            mode_button,
            spare_button,
            stick_button,
            green_led,
            timer,
        }));
    });
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    defmt::info!("bring-up complete, entering control loop");

    let mut app = Application::new();
    loop {
        app.tick(&mut joystick, &mut delay, &mut leds, &mut panel, &PANEL_STATE);
        delay.delay_ms(LOOP_DELAY_MS);
    }
}

#[interrupt]
fn IO_IRQ_BANK0() {
    cortex_m::interrupt::free(|cs| {
        let mut shared = BUTTON_IRQ.borrow(cs).borrow_mut();
        if let Some(state) = shared.as_mut() {
            let now_us = state.timer.get_counter_low();

            if state.mode_button.interrupt_status(Interrupt::EdgeLow) {
                state.mode_button.clear_interrupt(Interrupt::EdgeLow);
                if PANEL_STATE.accept(EventSource::ModeToggle, now_us) {
                    let enabled = PANEL_STATE.toggle_pwm();
                    defmt::debug!("pwm enabled: {}", enabled);
                }
            }

            if state.stick_button.interrupt_status(Interrupt::EdgeLow) {
                state.stick_button.clear_interrupt(Interrupt::EdgeLow);
                if PANEL_STATE.accept(EventSource::BorderCycle, now_us) {
                    // The green LED flips in lockstep with the border style
                    // and is driven here, not from the loop.
                    if PANEL_STATE.toggle_green() {
                        state.green_led.set_high().ok();
                    } else {
                        state.green_led.set_low().ok();
                    }
                    let style = PANEL_STATE.advance_border();
                    defmt::debug!("border style: {}", style);
                }
            }

            if state.spare_button.interrupt_status(Interrupt::EdgeLow) {
                state.spare_button.clear_interrupt(Interrupt::EdgeLow);
                // No action bound to this button; stamp the debounce clock
                // so a future binding inherits the same suppression.
                PANEL_STATE.accept(EventSource::Spare, now_us);
            }
        }
    });
}
