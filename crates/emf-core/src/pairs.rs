//! Flat key/value list parsing shared by dimensions and properties.
//!
//! Rules:
//! - Elements are read left to right as `key, value, key, value, ...`.
//! - A trailing key without a value pairs with `""` (never an error).

/// Interpret `kv` as consecutive `(key, value)` pairs.
pub fn flat_pairs<S: AsRef<str>>(kv: &[S]) -> impl Iterator<Item = (&str, &str)> {
    kv.chunks(2).filter_map(|chunk| match chunk {
        [k, v] => Some((k.as_ref(), v.as_ref())),
        // odd length: the unpaired key gets an empty value
        [k] => Some((k.as_ref(), "")),
        _ => None,
    })
}
