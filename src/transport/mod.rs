//! # Printer Transport Layer
//!
//! Encoders produce bytes; a [`ByteSink`] delivers them. The sink is opened
//! and closed by whoever owns it, never by the encoders.
//!
//! ## Available Transports
//!
//! - [`bluetooth`]: Bluetooth RFCOMM tty (Linux)
//! - any [`std::io::Write`] (files, `Vec<u8>`, sockets) through the blanket
//!   impl

pub mod bluetooth;

use std::io;

pub use bluetooth::BluetoothTransport;

use crate::error::Result;

/// Destination for printer bytes.
pub trait ByteSink {
    /// Write all of `bytes`, blocking until accepted.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;

    /// Push any buffered bytes out to the device.
    fn flush_bytes(&mut self) -> Result<()>;
}

impl<W: io::Write> ByteSink for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_all(bytes)?;
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<()> {
        self.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReciboError;

    #[test]
    fn test_vec_sink_appends() {
        let mut sink: Vec<u8> = vec![0x01];
        sink.write_bytes(&[0x02, 0x03]).unwrap();
        sink.flush_bytes().unwrap();
        assert_eq!(sink, vec![0x01, 0x02, 0x03]);
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_io() {
        let err = Broken.write_bytes(b"x").unwrap_err();
        assert!(matches!(err, ReciboError::Io(_)));
    }
}
