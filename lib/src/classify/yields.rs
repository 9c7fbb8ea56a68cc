use crate::jvm::{BinaryName, Name, UnqualifiedName};

/// Methods on `Fiber` which suspend the current fiber
pub static YIELD_METHODS: [UnqualifiedName; 5] = [
    UnqualifiedName::PARK,
    UnqualifiedName::YIELD,
    UnqualifiedName::PARKANDUNPARK,
    UnqualifiedName::YIELDANDUNPARK,
    UnqualifiedName::PARKANDSERIALIZE,
];

/// Is this call a suspension point?
///
/// Both the owner and the name have to match: a `park` method on some unrelated class is just an
/// ordinary call.
pub fn is_yield(owner: &str, name: &str) -> bool {
    owner == BinaryName::FIBER.as_str()
        && YIELD_METHODS
            .iter()
            .any(|yield_method| yield_method.as_str() == name)
}

#[cfg(test)]
mod test {
    use super::*;

    const FIBER: &str = "co/paralleluniverse/fibers/Fiber";

    #[test]
    fn every_yield_method_on_fiber() {
        for name in ["park", "yield", "parkAndUnpark", "yieldAndUnpark", "parkAndSerialize"] {
            assert!(is_yield(FIBER, name), "{}", name);
        }
    }

    #[test]
    fn owner_is_checked() {
        for name in &YIELD_METHODS {
            assert!(!is_yield("co/paralleluniverse/strands/Strand", name.as_str()));
            assert!(!is_yield("java/lang/Thread", name.as_str()));
            assert!(!is_yield("co/paralleluniverse/fibers/Fiber$1", name.as_str()));
        }
    }

    #[test]
    fn name_is_checked() {
        assert!(!is_yield(FIBER, "sleep"));
        assert!(!is_yield(FIBER, "Park"));
        assert!(!is_yield(FIBER, "parkAndUnparkLater"));
    }
}
