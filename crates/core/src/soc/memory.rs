//! Sparse reference RAM.

use std::collections::HashMap;

use crate::core::pipeline::signals::MemWidth;
use crate::soc::DataPort;

/// A byte-granular sparse memory backed by a hash map.
///
/// Unwritten bytes read as zero. Because storage is per byte, unaligned
/// accesses of any width work without special handling, which is exactly the
/// passthrough behavior the core expects from its collaborator.
#[derive(Debug, Clone, Default)]
pub struct SparseRam {
    bytes: HashMap<u32, u8>,
}

impl SparseRam {
    /// Creates an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a sequence of instruction words at `base`, little-endian.
    pub fn load_words(&mut self, base: u32, words: &[u32]) {
        for (i, word) in words.iter().enumerate() {
            let addr = base.wrapping_add((i as u32) * 4);
            self.write(addr, MemWidth::Word, *word);
        }
    }

    /// Reads one byte.
    #[must_use]
    pub fn read_u8(&self, addr: u32) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    /// Reads a little-endian 32-bit word; the fetch path uses this.
    #[must_use]
    pub fn read_u32(&self, addr: u32) -> u32 {
        let mut value = 0u32;
        for i in 0..4 {
            value |= u32::from(self.read_u8(addr.wrapping_add(i))) << (i * 8);
        }
        value
    }
}

impl DataPort for SparseRam {
    fn read(&mut self, addr: u32, width: MemWidth) -> u32 {
        let bytes = match width {
            MemWidth::Byte => 1,
            MemWidth::Half => 2,
            MemWidth::Word => 4,
        };
        let mut value = 0u32;
        for i in 0..bytes {
            value |= u32::from(self.read_u8(addr.wrapping_add(i))) << (i * 8);
        }
        value
    }

    fn write(&mut self, addr: u32, width: MemWidth, value: u32) {
        let bytes = match width {
            MemWidth::Byte => 1,
            MemWidth::Half => 2,
            MemWidth::Word => 4,
        };
        for i in 0..bytes {
            let byte = (value >> (i * 8)) as u8;
            let _ = self.bytes.insert(addr.wrapping_add(i), byte);
        }
    }
}
