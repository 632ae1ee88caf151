/// Spreadsheet-style row letters: 0 → `A`, 25 → `Z`, 26 → `AA`.
#[must_use]
pub fn row_label(row: u32) -> String {
    let mut n = row + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + u8::try_from(rem).unwrap_or(0)));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Zero-based row letter(s) followed by the one-based column number.
#[must_use]
pub fn cell_label(row: u32, col: u32) -> String {
    format!("{}{}", row_label(row), col + 1)
}
