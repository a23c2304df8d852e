//! Keyboard seam.
//!
//! A [`KeySource`] is the device; opening it yields a [`KeyReader`] guard that
//! holds the device until dropped. Because the guard borrows the source
//! mutably, only one reading loop can be active at a time.

use crate::error::{DeviceError, ReadError};
use crate::types::KeyInput;

/// Blocking reader over an open keyboard.
pub trait KeyReader {
    /// Block until the next key press.
    fn read_key(&mut self) -> Result<KeyInput, ReadError>;
}

impl<R: KeyReader + ?Sized> KeyReader for &mut R {
    fn read_key(&mut self) -> Result<KeyInput, ReadError> {
        (**self).read_key()
    }
}

/// A keyboard device that can be opened for reading.
pub trait KeySource {
    type Reader<'a>: KeyReader
    where
        Self: 'a;

    /// Acquire the device. The returned guard releases it on drop.
    fn open(&mut self) -> Result<Self::Reader<'_>, DeviceError>;
}
