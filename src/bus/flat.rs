//! Flat 64 KiB RAM bus. Every address is backed, so it never faults.

use crate::bus::Bus;
use crate::error::BusFault;

pub const ADDRESS_SPACE: usize = 0x1_0000;

pub struct FlatRam {
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl Default for FlatRam {
    fn default() -> Self {
        Self::new()
    }
}

impl FlatRam {
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copy `bytes` starting at `base`, wrapping past $FFFF.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let mut addr = base;
        for &b in bytes {
            self.data[addr as usize] = b;
            addr = addr.wrapping_add(1);
        }
    }

    /// Store `value` little-endian at `addr`.
    pub fn load_word(&mut self, addr: u16, value: u16) {
        self.load(addr, &value.to_le_bytes());
    }

    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl Bus for FlatRam {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> Result<u8, BusFault> {
        Ok(self.data[addr as usize])
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), BusFault> {
        self.data[addr as usize] = value;
        Ok(())
    }
}
