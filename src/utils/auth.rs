/// Constant-time API key comparison.
///
/// Compares every byte regardless of where the first mismatch occurs
/// so response timing does not leak key prefixes.
pub fn verify_api_key(provided: &str, expected: &str) -> bool {
    provided.len() == expected.len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
