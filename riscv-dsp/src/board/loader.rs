//! SPI bitstream loader for the FPGA-hosted core.
//!
//! Program images come as stimuli text, one `AAAAAAAA_DDDDDDDD` hex pair per
//! line. The loader parses the lines, coalesces runs of consecutive word
//! addresses into blocks, and streams each block over SPI into the core's
//! memory, verifying every block by reading it back.
//!
//! Generic over any [`embedded_hal::spi::SpiBus`] plus two
//! [`embedded_hal::digital::OutputPin`]s (active-low reset and fetch-enable),
//! so the whole protocol runs under host unit tests against a mock bus.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Largest run of words sent as one SPI transfer.
pub const MAX_BLOCK_WORDS: usize = 256;

/// Write command: `0x02` + big-endian address + payload.
const CMD_WRITE: u8 = 0x02;
/// Read command: `0x0B` + big-endian address, data valid after 8 dummy bytes.
const CMD_READ: u8 = 0x0B;

/// Readback payload offset: command + address (5) + dummy bytes (8).
const READBACK_OFFSET: usize = 13;

/// Transfer length beyond the payload: the readback offset plus slack for
/// the one-bit realignment.
const XFER_OVERHEAD: usize = READBACK_OFFSET + 4;

const XFER_LEN: usize = 4 * MAX_BLOCK_WORDS + XFER_OVERHEAD;

/// A stimuli line that did not parse as `HEX_HEX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StimuliError {
    /// 1-based line number.
    pub line: usize,
}

/// Loader failure, parameterized over the bus and pin error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderError<SpiE, PinE> {
    /// A stimuli line failed to parse.
    Parse { line: usize },
    /// The stimuli text contained no entries.
    NoEntries,
    /// SPI transfer failed.
    Spi(SpiE),
    /// Reset or fetch-enable pin failed.
    Pin(PinE),
    /// Readback disagreed with the written payload.
    Mismatch { addr: u32, index: usize },
}

impl<SpiE, PinE> From<StimuliError> for LoaderError<SpiE, PinE> {
    fn from(e: StimuliError) -> Self {
        LoaderError::Parse { line: e.line }
    }
}

/// Iterator over parsed stimuli entries, `(word address, staged data word)`.
///
/// The data word is byte-swapped as it is parsed, so the staged value
/// serializes little-endian into the byte order the hex text spells out.
/// Blank lines are skipped.
pub struct StimuliLines<'a> {
    lines: core::iter::Enumerate<core::str::Lines<'a>>,
}

/// Parse stimuli text into `(addr, data)` entries.
pub fn parse_stimuli(text: &str) -> StimuliLines<'_> {
    StimuliLines {
        lines: text.lines().enumerate(),
    }
}

impl<'a> Iterator for StimuliLines<'a> {
    type Item = Result<(u32, u32), StimuliError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (idx, line) = self.lines.next()?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let parsed = line.split_once('_').and_then(|(a, d)| {
                let addr = u32::from_str_radix(a, 16).ok()?;
                let data = u32::from_str_radix(d, 16).ok()?;
                Some((addr, data.swap_bytes()))
            });
            return Some(parsed.ok_or(StimuliError { line: idx + 1 }));
        }
    }
}

/// SPI bitstream loader.
///
/// Owns the bus, the active-low reset line and the fetch-enable line, plus
/// the transfer buffers sized for one maximum block.
pub struct SpiLoader<SPI, RST, FEN> {
    spi: SPI,
    reset_n: RST,
    fetch_en: FEN,
    wr_buf: [u8; XFER_LEN],
    rd_buf: [u8; XFER_LEN],
}

impl<SPI, RST, FEN> SpiLoader<SPI, RST, FEN>
where
    SPI: SpiBus,
    RST: OutputPin,
    FEN: OutputPin<Error = RST::Error>,
{
    pub fn new(spi: SPI, reset_n: RST, fetch_en: FEN) -> Self {
        Self {
            spi,
            reset_n,
            fetch_en,
            wr_buf: [0; XFER_LEN],
            rd_buf: [0; XFER_LEN],
        }
    }

    /// Pulse the active-low reset and hold the core fetch-disabled.
    pub fn reset(&mut self) -> Result<(), LoaderError<SPI::Error, RST::Error>> {
        self.fetch_en.set_low().map_err(LoaderError::Pin)?;
        self.reset_n.set_low().map_err(LoaderError::Pin)?;
        self.reset_n.set_high().map_err(LoaderError::Pin)?;
        Ok(())
    }

    /// Release the core: fetch-enable high, it starts executing.
    pub fn start(&mut self) -> Result<(), LoaderError<SPI::Error, RST::Error>> {
        self.fetch_en.set_high().map_err(LoaderError::Pin)
    }

    /// Reset the core, load the stimuli image, start execution.
    pub fn boot(&mut self, stimuli: &str) -> Result<(), LoaderError<SPI::Error, RST::Error>> {
        self.reset()?;
        self.load_stimuli(stimuli)?;
        self.start()
    }

    /// Parse `stimuli`, coalesce consecutive word addresses and write the
    /// resulting blocks. Every block is verified by readback.
    pub fn load_stimuli(
        &mut self,
        stimuli: &str,
    ) -> Result<(), LoaderError<SPI::Error, RST::Error>> {
        let mut block = [0u32; MAX_BLOCK_WORDS];
        let mut base_addr = 0u32;
        let mut len = 0usize;
        let mut any = false;

        for entry in parse_stimuli(stimuli) {
            let (addr, data) = entry?;
            any = true;
            let contiguous = len > 0 && addr == base_addr + 4 * len as u32;
            if len == MAX_BLOCK_WORDS || (len > 0 && !contiguous) {
                self.write_block(base_addr, &block[..len])?;
                len = 0;
            }
            if len == 0 {
                base_addr = addr;
            }
            block[len] = data;
            len += 1;
        }

        if !any {
            return Err(LoaderError::NoEntries);
        }
        if len > 0 {
            self.write_block(base_addr, &block[..len])?;
        }
        Ok(())
    }

    /// Write one block of words at `addr`, then read it back and compare.
    ///
    /// The readback stream arrives one bit late out of the hardware shift
    /// register, so the whole receive buffer is realigned with a one-bit
    /// left shift before the payload at [`READBACK_OFFSET`] is compared.
    pub fn write_block(
        &mut self,
        addr: u32,
        words: &[u32],
    ) -> Result<(), LoaderError<SPI::Error, RST::Error>> {
        debug_assert!(!words.is_empty() && words.len() <= MAX_BLOCK_WORDS);
        let payload_len = 4 * words.len();

        self.wr_buf[0] = CMD_WRITE;
        self.wr_buf[1..5].copy_from_slice(&addr.to_be_bytes());
        for (i, word) in words.iter().enumerate() {
            self.wr_buf[5 + 4 * i..5 + 4 * i + 4].copy_from_slice(&word.to_le_bytes());
        }
        self.spi
            .write(&self.wr_buf[..5 + payload_len])
            .map_err(LoaderError::Spi)?;

        let xfer_len = payload_len + XFER_OVERHEAD;
        self.wr_buf[..xfer_len].fill(0);
        self.wr_buf[0] = CMD_READ;
        self.wr_buf[1..5].copy_from_slice(&addr.to_be_bytes());
        self.spi
            .transfer(&mut self.rd_buf[..xfer_len], &self.wr_buf[..xfer_len])
            .map_err(LoaderError::Spi)?;

        for i in 0..xfer_len - 1 {
            self.rd_buf[i] = (self.rd_buf[i] << 1) | (self.rd_buf[i + 1] >> 7);
        }

        for (i, word) in words.iter().enumerate() {
            let expected = word.to_le_bytes();
            for (b, &e) in expected.iter().enumerate() {
                if self.rd_buf[READBACK_OFFSET + 4 * i + b] != e {
                    return Err(LoaderError::Mismatch {
                        addr: addr + 4 * i as u32,
                        index: 4 * i + b,
                    });
                }
            }
        }
        Ok(())
    }

    /// Release the bus and control pins.
    pub fn free(self) -> (SPI, RST, FEN) {
        (self.spi, self.reset_n, self.fetch_en)
    }
}
