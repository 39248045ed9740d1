//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED panels via I2C. Uses horizontal
//! addressing mode so a full frame goes out in a single data transfer.

use kinesis_core::frame::{FrameBuffer, PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const ENTIRE_ON_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver owning the frame buffer
pub struct Ssd1306<I2C> {
    i2c: I2C,
    frame: FrameBuffer,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            frame: FrameBuffer::new(),
        }
    }

    /// Initialize the panel
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Internal charge pump
            cmd::SET_MEM_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF, // High contrast
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DESELECT,
            0x40,
            cmd::ENTIRE_ON_RESUME,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command byte to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[0x00, cmd]).await
    }

    /// Mutable access to the frame buffer for rendering
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    /// Flush the frame buffer to the panel
    pub async fn flush(&mut self) -> Result<(), I2C::Error> {
        // Reset the address window to the full panel
        self.command(cmd::SET_COLUMN_ADDR).await?;
        self.command(0x00).await?;
        self.command(WIDTH as u8 - 1).await?;
        self.command(cmd::SET_PAGE_ADDR).await?;
        self.command(0x00).await?;
        self.command(PAGES as u8 - 1).await?;

        // Whole frame in one data transfer
        let mut data = [0u8; WIDTH * PAGES + 1];
        data[0] = 0x40; // Data mode
        for (page, chunk) in self
            .frame
            .as_pages()
            .iter()
            .zip(data[1..].chunks_exact_mut(WIDTH))
        {
            chunk.copy_from_slice(page);
        }
        self.i2c.write(SSD1306_ADDR, &data).await
    }

    /// Set display contrast (0-255)
    #[allow(dead_code)]
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }

    /// Turn display on/off
    #[allow(dead_code)]
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON).await
        } else {
            self.command(cmd::DISPLAY_OFF).await
        }
    }
}
