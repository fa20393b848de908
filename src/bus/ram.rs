/*!
RAM module: the 2 KiB CPU internal RAM with mirrored access.

CPU address map for internal RAM:
- $0000-$07FF: 2 KiB internal RAM (zero page at $0000-$00FF, stack at $0100-$01FF)
- $0800-$1FFF: Mirrors of $0000-$07FF (mask with & 0x07FF)

Owned by `NromBus`; `FlatRam` does not use it since the flat bus has no mirroring.
*/

/// Size of CPU internal RAM (in bytes).
pub const CPU_RAM_SIZE: usize = 0x0800;

/// CPU internal RAM with mirrored access helpers.
///
/// Call `read`/`write` with CPU addresses; they are masked down to the
/// physical range automatically.
pub struct Ram {
    data: [u8; CPU_RAM_SIZE],
}

impl Default for Ram {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [0; CPU_RAM_SIZE],
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte from $0000-$1FFF, applying 2 KiB mirroring.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[Self::mirror_index(addr)]
    }

    /// Write a byte to $0000-$1FFF, applying 2 KiB mirroring.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[Self::mirror_index(addr)] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn mirror_index(addr: u16) -> usize {
        (addr as usize) & (CPU_RAM_SIZE - 1)
    }
}
