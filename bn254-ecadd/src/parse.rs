use crate::arithmetic::AffinePoint;
use crate::curve::Curve;
use crate::U256;

pub const WORD_SIZE: usize = 32;
pub const INPUT_WORDS: usize = 4;
pub const OUTPUT_WORDS: usize = 2;
pub const INPUT_LENGTH: usize = INPUT_WORDS * WORD_SIZE;
pub const OUTPUT_LENGTH: usize = OUTPUT_WORDS * WORD_SIZE;

/// Copies at most `INPUT_LENGTH` bytes of `input`, zero padding on the
/// right when it is shorter.
pub fn pad_input(input: &[u8]) -> [u8; INPUT_LENGTH] {
    let mut padded = [0u8; INPUT_LENGTH];
    let len = input.len().min(INPUT_LENGTH);
    padded[..len].copy_from_slice(&input[..len]);
    padded
}

/// `x1, y1, x2, y2` as big-endian words.
pub fn decode_words(input: &[u8]) -> [U256; INPUT_WORDS] {
    let padded = pad_input(input);
    let mut words = [U256::ZERO; INPUT_WORDS];
    for (word, chunk) in words.iter_mut().zip(padded.chunks_exact(WORD_SIZE)) {
        *word = U256::from_be_slice(chunk);
    }
    words
}

pub fn decode_points<C: Curve>(input: &[u8]) -> (AffinePoint<C>, AffinePoint<C>) {
    let [x1, y1, x2, y2] = decode_words(input);
    (AffinePoint::new(x1, y1), AffinePoint::new(x2, y2))
}

pub fn parse_hex_input(input: &str) -> Result<Vec<u8>, String> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(trimmed).map_err(|e| e.to_string())?;
    if bytes.len() > INPUT_LENGTH {
        return Err(format!(
            "input is {} bytes, at most {} are read",
            bytes.len(),
            INPUT_LENGTH
        ));
    }
    Ok(bytes)
}
