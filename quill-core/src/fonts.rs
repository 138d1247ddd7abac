use serde::{Deserialize, Serialize};

pub const DEFAULT_FAMILY: &str = "Sans";
pub const DEFAULT_SIZE: i32 = 12;

/// Point sizes offered in the toolbar size list.
pub const PRESET_SIZES: &[i32] = &[8, 9, 10, 11, 12, 14, 16, 18, 20, 22, 24, 26, 28, 36, 48, 72];

pub const SIZE_ERROR_MESSAGE: &str = "Font size must be a positive integer.";

/// The font applied to a document window: family name, point size, and
/// style flags. UI state only — never written into the document file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec {
            family: DEFAULT_FAMILY.to_string(),
            size: DEFAULT_SIZE,
            bold: false,
            italic: false,
        }
    }
}

impl FontSpec {
    pub fn new(family: &str, size: i32) -> FontSpec {
        FontSpec {
            family: family.to_string(),
            size,
            bold: false,
            italic: false,
        }
    }

    /// Step the size by `delta` points, clamped so it stays positive.
    pub fn step_size(&mut self, delta: i32) {
        self.size = (self.size + delta).max(1);
    }
}

/// Parse a size entry from the toolbar. Accepts only a positive integer;
/// surrounding whitespace is tolerated.
pub fn parse_size(input: &str) -> Result<i32, String> {
    let size: i32 = input
        .trim()
        .parse()
        .map_err(|_| SIZE_ERROR_MESSAGE.to_string())?;
    if size <= 0 {
        return Err(SIZE_ERROR_MESSAGE.to_string());
    }
    Ok(size)
}
