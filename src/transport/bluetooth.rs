//! # Bluetooth RFCOMM Transport
//!
//! Sends bytes to a printer over Bluetooth Serial Port Profile (SPP) through
//! an RFCOMM tty.
//!
//! ## Bluetooth Setup (Linux)
//!
//! The printer must already be paired and bound to an RFCOMM device:
//!
//! ```bash
//! $ bluetoothctl
//! [bluetooth]# scan on
//! [bluetooth]# pair 00:11:62:XX:XX:XX
//!
//! $ sudo rfcomm bind 0 00:11:62:XX:XX:XX
//! # creates /dev/rfcomm0
//! ```
//!
//! ## TTY Configuration
//!
//! The device is switched to raw mode so binary data (raster bytes, hex
//! graphics) passes through unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL, IXON, IXOFF, IXANY cleared
//! - **No output processing**: OPOST cleared (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **Non-canonical, no echo**: ECHO, ECHONL, ICANON, ISIG, IEXTEN cleared
//!
//! ## Chunked Writes
//!
//! Writes larger than the chunk size (4096 bytes) are split with a short
//! pause between chunks so the radio buffer is not overrun.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::{ReciboError, Result};

/// Default RFCOMM device path
pub const DEFAULT_DEVICE: &str = "/dev/rfcomm0";

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// # Bluetooth Printer Transport
///
/// Implements [`std::io::Write`], so it is a [`ByteSink`](super::ByteSink).
///
/// ```no_run
/// use recibo::printer::Printer;
/// use recibo::transport::BluetoothTransport;
///
/// let transport = BluetoothTransport::open("/dev/rfcomm0")?;
/// let mut printer = Printer::new(transport);
/// printer.print_text("Hola")?;
/// # Ok::<(), recibo::ReciboError>(())
/// ```
pub struct BluetoothTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl BluetoothTransport {
    /// Open an RFCOMM device and configure it for raw binary output.
    ///
    /// ## Errors
    ///
    /// `Transport` if the device does not exist, permission is denied (the
    /// user may need the `dialout` group) or the tty cannot be configured.
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            ReciboError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd())?;
        log::debug!("opened {} in raw mode", path.display());

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open with default device path (/dev/rfcomm0)
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_DEVICE)
    }

    /// Set the chunk size for large writes (minimum 1).
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Write for BluetoothTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_all(buf)?;
        Ok(buf.len())
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        if data.len() <= self.chunk_size {
            return self.file.write_all(data);
        }

        for chunk in data.chunks(self.chunk_size) {
            self.file.write_all(chunk)?;
            if !self.chunk_delay.is_zero() {
                thread::sleep(self.chunk_delay);
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Configure a file descriptor for raw TTY mode.
///
/// IXON/IXOFF/IXANY must be cleared: 0x11 (XON) and 0x13 (XOFF) occur in
/// raster data.
fn configure_tty_raw(fd: i32) -> Result<()> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ReciboError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(ReciboError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert_eq!(DEFAULT_DEVICE, "/dev/rfcomm0");
    }

    #[test]
    fn test_open_missing_device_is_transport_error() {
        let err = BluetoothTransport::open("/nonexistent/rfcomm99").err().unwrap();
        assert!(matches!(err, ReciboError::Transport(_)));
    }

    // Writing needs a bound RFCOMM device; run manually with a printer.
}
