use super::{BlockingIndex, CallSite};
use crate::jvm::{BinaryName, Error, MethodDescriptor, Name, UnqualifiedName};
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Method which blocks the underlying OS thread
///
/// Inside a fiber, these calls pin the carrier thread instead of suspending the fiber.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockingMethod {
    pub owner: BinaryName,
    pub name: UnqualifiedName,

    /// Every overload that blocks (eg. `(J)V` and `(JI)V` for `Thread.sleep`)
    pub descriptors: &'static [&'static str],
}

impl BlockingMethod {
    /// Does the call site invoke one of the blocking overloads?
    pub fn matches(&self, site: &CallSite) -> bool {
        self.owner.as_str() == site.owner
            && self.name.as_str() == site.name
            && self.descriptors.iter().any(|desc| *desc == site.descriptor)
    }
}

impl Display for BlockingMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.owner.as_str(), self.name.as_str())
    }
}

/// Built-in catalog of blocking primitives
///
/// The order here is load-bearing: the index of an entry is what gets reported in
/// `Classification::DisallowedBlocking`.
pub static BLOCKING_METHODS: [BlockingMethod; 3] = [
    BlockingMethod {
        owner: BinaryName::THREAD,
        name: UnqualifiedName::SLEEP,
        descriptors: &["(J)V", "(JI)V"],
    },
    BlockingMethod {
        owner: BinaryName::THREAD,
        name: UnqualifiedName::JOIN,
        descriptors: &["()V", "(J)V", "(JI)V"],
    },
    BlockingMethod {
        owner: BinaryName::OBJECT,
        name: UnqualifiedName::WAIT,
        descriptors: &["()V", "(J)V", "(JI)V"],
    },
];

/// Validated table of blocking methods, searched in declaration order
#[derive(Debug)]
pub struct SignatureTable {
    entries: &'static [BlockingMethod],
}

impl SignatureTable {
    /// Check the catalog before any lookups happen
    ///
    /// Every entry needs at least one descriptor, every descriptor must parse, and no two entries
    /// may share an owner and name.
    pub fn new(entries: &'static [BlockingMethod]) -> Result<SignatureTable, Error> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        for entry in entries {
            if entry.descriptors.is_empty() {
                return Err(Error::EmptyBlockingMethod(entry.to_string()));
            }
            for descriptor in entry.descriptors {
                if let Err(err) = MethodDescriptor::parse(descriptor) {
                    log::error!("Blocking method {} has a malformed descriptor", entry);
                    return Err(err);
                }
            }
            if !seen.insert((entry.owner.as_str(), entry.name.as_str())) {
                return Err(Error::DuplicateBlockingMethod(entry.to_string()));
            }
        }
        log::debug!("Loaded {} blocking methods", entries.len());
        Ok(SignatureTable { entries })
    }

    /// Table of the JDK's thread-blocking primitives
    pub fn standard() -> Result<SignatureTable, Error> {
        SignatureTable::new(&BLOCKING_METHODS)
    }

    /// Index of the first entry matching the call site
    pub fn find(&self, site: &CallSite) -> Option<BlockingIndex> {
        self.entries.iter().position(|entry| entry.matches(site))
    }

    pub fn get(&self, index: BlockingIndex) -> Option<&BlockingMethod> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockingIndex, &BlockingMethod)> {
        self.entries.iter().enumerate()
    }
}
