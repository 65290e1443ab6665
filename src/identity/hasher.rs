use md5::{Digest, Md5};

/// Derive the stable credential identifier for a member.
///
/// The digest input is the exact UTF-8 text of
/// `first_name || last_name || member_number` with no separators and
/// no normalization (no case folding, no trimming), so the result is
/// byte-for-byte reproducible across runs and across languages.
///
/// This function is total: empty name fields still produce a
/// (low-entropy) digest rather than an error. Uniqueness of the
/// inputs is the roster owner's responsibility.
pub fn derive_identifier(member_number: u32, first_name: &str, last_name: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(first_name.as_bytes());
    hasher.update(last_name.as_bytes());

    let mut buf = itoa::Buffer::new();
    hasher.update(buf.format(member_number).as_bytes());

    hex::encode(hasher.finalize())
}
