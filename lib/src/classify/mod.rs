//! Decide what role a method call plays with respect to fiber suspension
//!
//! The instrumentation driver walks a method body, builds a [`CallSite`] for every invoke
//! instruction, and asks the [`Classifier`] what to do with it. Classification only consults the
//! static tables in this module, so it is a pure function of the call site and can be run from
//! any number of threads at once.

mod allowed;
mod blocking;
mod markers;
mod yields;

pub use allowed::*;
pub use blocking::*;
pub use markers::*;
pub use yields::*;

use crate::jvm::Error;
use once_cell::sync::Lazy;

/// Position of an entry in the blocking method catalog
pub type BlockingIndex = usize;

/// Method reference from an invoke instruction
///
/// All three parts are kept exactly as they appear in the constant pool and are only ever compared
/// for equality. In particular the owner need not be a class: `int[].clone()` is owned by `[I`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub owner: String,
    pub name: String,
    pub descriptor: String,
}

impl CallSite {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        descriptor: impl Into<String>,
    ) -> CallSite {
        CallSite {
            owner: owner.into(),
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }
}

/// What the instrumentation driver should do about a call
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Nothing to do
    NotRelevant,

    /// Call suspends the fiber, so it needs a suspend/resume boundary around it
    YieldPoint,

    /// Call looks blocking but cooperates with fibers, so don't report it
    AllowedBlocking,

    /// Call blocks the thread (the index picks out which catalog entry matched)
    DisallowedBlocking(BlockingIndex),
}

/// Single entry point for classifying call sites
#[derive(Debug)]
pub struct Classifier {
    blocking: SignatureTable,
}

static SHARED_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| match Classifier::standard() {
    Ok(classifier) => classifier,
    Err(err) => panic!("Built-in blocking method catalog is corrupt: {}", err),
});

impl Classifier {
    pub fn new(blocking: SignatureTable) -> Classifier {
        Classifier { blocking }
    }

    /// Classifier backed by the built-in blocking method catalog
    pub fn standard() -> Result<Classifier, Error> {
        Ok(Classifier::new(SignatureTable::standard()?))
    }

    /// Process-wide classifier, built the first time it is requested
    ///
    /// Panics if the built-in catalog fails validation, before any call gets classified.
    pub fn shared() -> &'static Classifier {
        &SHARED_CLASSIFIER
    }

    /// Classify a call site
    ///
    /// Checks go in priority order: yield points first, then calls on `Strand`, then the blocking
    /// catalog. A `Strand.sleep(J)V` call is therefore allowed even though it has the same name
    /// and descriptor as `Thread.sleep(J)V`.
    pub fn classify(&self, site: &CallSite) -> Classification {
        let classification = if is_yield(&site.owner, &site.name) {
            Classification::YieldPoint
        } else if is_allowed_to_block(&site.owner) {
            Classification::AllowedBlocking
        } else if let Some(index) = self.blocking.find(site) {
            Classification::DisallowedBlocking(index)
        } else {
            Classification::NotRelevant
        };
        log::trace!(
            "{}.{}{} is {:?}",
            site.owner,
            site.name,
            site.descriptor,
            classification
        );
        classification
    }

    /// Blocking method reported by `Classification::DisallowedBlocking`
    pub fn blocking_method(&self, index: BlockingIndex) -> Option<&BlockingMethod> {
        self.blocking.get(index)
    }

    pub fn blocking_methods(&self) -> &SignatureTable {
        &self.blocking
    }
}

/// Classify a call site using the shared classifier
pub fn classify(site: &CallSite) -> Classification {
    Classifier::shared().classify(site)
}
