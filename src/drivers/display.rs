//! OLED panel driver: cursor placement and border rendering.
//!
//! Owns a buffered SSD1306; one `render` + `flush` pair per loop tick.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use crate::config::{ADC_MAX, CURSOR_MAX_X, CURSOR_MAX_Y, CURSOR_SIZE};
use crate::drivers::joystick::AxisSample;
use crate::fault::Fault;
use crate::state::BorderStyle;

/// Cursor origin on the display, x in [0, 119], y in [0, 54].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, defmt::Format)]
pub struct PixelPosition {
    pub x: u16,
    pub y: u16,
}

/// Scale a sample onto the cursor's travel range, flooring to integers.
pub fn cursor_position(sample: AxisSample) -> PixelPosition {
    PixelPosition {
        x: (u32::from(sample.x) * u32::from(CURSOR_MAX_X) / u32::from(ADC_MAX)) as u16,
        y: (u32::from(sample.y) * u32::from(CURSOR_MAX_Y) / u32::from(ADC_MAX)) as u16,
    }
}

/// The 128x64 monochrome panel.
pub struct Panel<DI> {
    display: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<DI: WriteOnlyDataCommand> Panel<DI> {
    pub fn new(interface: DI) -> Self {
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { display }
    }

    pub fn init(&mut self) -> Result<(), Fault> {
        self.display.init().map_err(|_| Fault::PeripheralInit)?;
        self.flush().map_err(|_| Fault::PeripheralInit)
    }

    /// Rebuild the frame buffer: cursor square plus the selected border.
    /// Drawing into the buffer cannot fail; only `flush` talks to the bus.
    pub fn render(&mut self, style: BorderStyle, cursor: PixelPosition) {
        self.display.clear_buffer();

        Rectangle::new(
            Point::new(i32::from(cursor.x), i32::from(cursor.y)),
            Size::new(CURSOR_SIZE, CURSOR_SIZE),
        )
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut self.display)
        .ok();

        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        let fill = PrimitiveStyle::with_fill(BinaryColor::On);

        match style {
            // The clear above already wiped any previous border
            BorderStyle::None => {}
            BorderStyle::Outline => {
                Rectangle::new(Point::new(1, 1), Size::new(125, 60))
                    .into_styled(stroke)
                    .draw(&mut self.display)
                    .ok();
            }
            BorderStyle::Bars => {
                Rectangle::new(Point::new(1, 0), Size::new(125, 4))
                    .into_styled(fill)
                    .draw(&mut self.display)
                    .ok();
                Rectangle::new(Point::new(1, 57), Size::new(125, 4))
                    .into_styled(fill)
                    .draw(&mut self.display)
                    .ok();
            }
            BorderStyle::HLines => {
                Line::new(Point::new(3, 0), Point::new(121, 0))
                    .into_styled(stroke)
                    .draw(&mut self.display)
                    .ok();
                Line::new(Point::new(3, 60), Point::new(121, 60))
                    .into_styled(stroke)
                    .draw(&mut self.display)
                    .ok();
            }
            BorderStyle::VLines => {
                Line::new(Point::new(1, 2), Point::new(1, 60))
                    .into_styled(stroke)
                    .draw(&mut self.display)
                    .ok();
                Line::new(Point::new(125, 2), Point::new(125, 60))
                    .into_styled(stroke)
                    .draw(&mut self.display)
                    .ok();
            }
        }
    }

    /// Transmit the frame buffer to the display.
    pub fn flush(&mut self) -> Result<(), Fault> {
        self.display.flush().map_err(|_| Fault::DisplayTransmit)
    }
}
