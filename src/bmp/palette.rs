use core::ops::Index;

use super::{COLOR_TABLE_LEN, PALETTE_SIZE};

/// One color table entry, stored on disk as B, G, R, reserved.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

/// The 256-entry color table of an 8-bit bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
    entries: [PaletteEntry; PALETTE_SIZE],
}

impl Default for ColorTable {
    fn default() -> Self {
        Self {
            entries: [PaletteEntry::default(); PALETTE_SIZE],
        }
    }
}

impl ColorTable {
    pub fn new(entries: [PaletteEntry; PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// Linear gray ramp: entry `i` is (i, i, i).
    pub fn grayscale() -> Self {
        let mut entries = [PaletteEntry::default(); PALETTE_SIZE];
        for (i, e) in entries.iter_mut().enumerate() {
            let v = i as u8;
            *e = PaletteEntry {
                blue: v,
                green: v,
                red: v,
                reserved: 0,
            };
        }
        Self { entries }
    }

    pub(crate) fn from_bytes(buf: &[u8; COLOR_TABLE_LEN]) -> Self {
        let mut entries = [PaletteEntry::default(); PALETTE_SIZE];
        for (e, quad) in entries.iter_mut().zip(buf.chunks_exact(4)) {
            *e = PaletteEntry {
                blue: quad[0],
                green: quad[1],
                red: quad[2],
                reserved: quad[3],
            };
        }
        Self { entries }
    }

    pub(crate) fn to_bytes(&self) -> [u8; COLOR_TABLE_LEN] {
        let mut buf = [0u8; COLOR_TABLE_LEN];
        for (quad, e) in buf.chunks_exact_mut(4).zip(self.entries.iter()) {
            quad.copy_from_slice(&[e.blue, e.green, e.red, e.reserved]);
        }
        buf
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    pub fn set(&mut self, index: u8, entry: PaletteEntry) {
        self.entries[index as usize] = entry;
    }

    pub fn entries(&self) -> &[PaletteEntry; PALETTE_SIZE] {
        &self.entries
    }
}

impl Index<u8> for ColorTable {
    type Output = PaletteEntry;

    fn index(&self, index: u8) -> &PaletteEntry {
        &self.entries[index as usize]
    }
}
