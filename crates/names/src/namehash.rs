//! Flowns namehash
//!
//! Flowns keys its records by a recursive SHA3-256 "node" of the dotted name.
//! Each step hashes the *hex text* of the previous node concatenated with the
//! *hex text* of the label digest, so the input is ASCII, not raw bytes.

use sha3::{Digest, Sha3_256};

/// Node of the empty name: 32 zero bytes.
pub const ROOT_NODE: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Compute the `0x`-prefixed namehash for `domain_name`.
///
/// An empty name returns [`ROOT_NODE`] unchanged. Labels are hashed as-is, so
/// empty labels (`"a..fn"`) contribute the digest of the empty string.
pub fn compute_node(domain_name: &str) -> String {
    let mut node = "00".repeat(32);

    if domain_name.is_empty() {
        tracing::warn!("namehash requested for an empty name, returning the root node");
        return format!("0x{node}");
    }

    for label in domain_name.split('.').rev() {
        let label_hash = sha3_hex(label.as_bytes());
        node.push_str(&label_hash);
        node = sha3_hex(node.as_bytes());
    }

    format!("0x{node}")
}

fn sha3_hex(data: &[u8]) -> String {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_root_node() {
        assert_eq!(compute_node(""), ROOT_NODE);
        assert_eq!(ROOT_NODE.len(), 66);
    }

    #[test]
    fn known_vectors() {
        assert_eq!(
            compute_node("fn"),
            "0x9cadad6f0cd11110b00442613c677688b5928da1c50179f045148363c2e590d3"
        );
        assert_eq!(
            compute_node("alice.fn"),
            "0x86bd04db1a89cb78de75f9c1ff99e212a65e8a484738c89428bb2d807d2d1cb3"
        );
        assert_eq!(
            compute_node("caos.fn"),
            "0xc7b2ccea1c93c2798f5d0d3c12f98f81a4086d5fadb601b03f6c41c95ef02bb5"
        );
    }

    #[test]
    fn labels_are_processed_right_to_left() {
        let ab = compute_node("a.b");
        let ba = compute_node("b.a");
        assert_ne!(ab, ba);
        assert_eq!(
            ab,
            "0x508c6d57b024368fd70a97b59eeb56f11f23973bb27ff291e5bb72c998eae4b3"
        );
        assert_eq!(
            ba,
            "0xece7d21f6bd4674be420c3580a7748563c09c81141d178b8781a4a27642b40e0"
        );
    }

    #[test]
    fn single_label_matches_manual_step() {
        let label_hash = sha3_hex(b"fn");
        assert_eq!(
            label_hash,
            "a0b7f904f43c21943ae2556329e6e3bbd3a4bb10d4f1d40f0e4a18eeba5d01c7"
        );
        let expected = sha3_hex(format!("{}{}", "00".repeat(32), label_hash).as_bytes());
        assert_eq!(compute_node("fn"), format!("0x{expected}"));
    }

    #[test]
    fn empty_labels_still_hash() {
        assert_ne!(compute_node("alice..fn"), compute_node("alice.fn"));
        assert_ne!(compute_node("."), ROOT_NODE);
    }
}
