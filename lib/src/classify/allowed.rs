use crate::jvm::{BinaryName, Name};

/// Can calls on this class block without being reported?
///
/// `Strand` implements its blocking operations on top of fiber parking, so they suspend a fiber
/// rather than pin its thread.
pub fn is_allowed_to_block(owner: &str) -> bool {
    owner == BinaryName::STRAND.as_str()
}
