/// Splits `bytes` on every `separator`. `n` separators give `n + 1` segments;
/// leading, trailing, and adjacent separators produce empty segments.
pub fn split(bytes: &[u8], separator: u8) -> Vec<Vec<u8>> {
    bytes
        .split(|&byte| byte == separator)
        .map(<[u8]>::to_vec)
        .collect()
}
