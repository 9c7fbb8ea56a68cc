use crate::jvm::BinaryName;
use bitflags::bitflags;
use once_cell::sync::Lazy;

/// Annotations that instrumentation reads from (or stamps onto) classes and methods
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Marker {
    /// Method may suspend, so it must be instrumented
    Suspendable,

    /// Class or method was already instrumented by an earlier pass
    Instrumented,

    /// Class or method must be left alone
    DontInstrument,
}

impl Marker {
    pub const ALL: [Marker; 3] = [
        Marker::Suspendable,
        Marker::Instrumented,
        Marker::DontInstrument,
    ];

    pub const fn binary_name(self) -> BinaryName {
        match self {
            Marker::Suspendable => BinaryName::SUSPENDABLE,
            Marker::Instrumented => BinaryName::INSTRUMENTED,
            Marker::DontInstrument => BinaryName::DONTINSTRUMENT,
        }
    }

    /// Type descriptor of the annotation (`L<binary name>;`)
    pub fn descriptor(self) -> &'static str {
        let descriptors = MarkerDescriptors::get();
        match self {
            Marker::Suspendable => descriptors.suspendable(),
            Marker::Instrumented => descriptors.instrumented(),
            Marker::DontInstrument => descriptors.dont_instrument(),
        }
    }

    /// Recognize an annotation descriptor, which has to match byte for byte
    pub fn from_descriptor(descriptor: &str) -> Option<Marker> {
        Marker::ALL
            .into_iter()
            .find(|marker| marker.descriptor() == descriptor)
    }

    pub const fn flag(self) -> Markers {
        match self {
            Marker::Suspendable => Markers::SUSPENDABLE,
            Marker::Instrumented => Markers::INSTRUMENTED,
            Marker::DontInstrument => Markers::DONT_INSTRUMENT,
        }
    }
}

/// Descriptors of the three markers, rendered once and then shared
#[derive(Debug)]
pub struct MarkerDescriptors {
    suspendable: String,
    instrumented: String,
    dont_instrument: String,
}

static MARKER_DESCRIPTORS: Lazy<MarkerDescriptors> = Lazy::new(|| MarkerDescriptors {
    suspendable: BinaryName::SUSPENDABLE.descriptor(),
    instrumented: BinaryName::INSTRUMENTED.descriptor(),
    dont_instrument: BinaryName::DONTINSTRUMENT.descriptor(),
});

impl MarkerDescriptors {
    pub fn get() -> &'static MarkerDescriptors {
        &MARKER_DESCRIPTORS
    }

    pub fn suspendable(&self) -> &str {
        &self.suspendable
    }

    pub fn instrumented(&self) -> &str {
        &self.instrumented
    }

    pub fn dont_instrument(&self) -> &str {
        &self.dont_instrument
    }
}

bitflags! {
    /// Markers found among the annotations of a class or method
    pub struct Markers: u8 {
        const SUSPENDABLE = 0x01;
        const INSTRUMENTED = 0x02;
        const DONT_INSTRUMENT = 0x04;
    }
}

impl Markers {
    /// Collect markers from annotation descriptors, ignoring annotations that aren't markers
    pub fn from_descriptors<'a>(descriptors: impl IntoIterator<Item = &'a str>) -> Markers {
        descriptors
            .into_iter()
            .filter_map(Marker::from_descriptor)
            .fold(Markers::empty(), |acc, marker| acc | marker.flag())
    }
}

/// Does a `throws` clause make the method suspendable?
///
/// Only the checked `SuspendExecution` counts. `RuntimeSuspendExecution` is unchecked, so it never
/// needs to be (and is not expected to be) declared.
pub fn throws_suspend_execution<'a>(exceptions: impl IntoIterator<Item = &'a BinaryName>) -> bool {
    exceptions
        .into_iter()
        .any(|exception| *exception == BinaryName::SUSPENDEXECUTION)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::jvm::Name;

    #[test]
    fn descriptors_wrap_binary_names() {
        for marker in Marker::ALL {
            let expected = format!("L{};", marker.binary_name().as_str());
            assert_eq!(marker.descriptor(), expected);
            assert_eq!(marker.binary_name().descriptor(), expected);
        }
        let descriptors = MarkerDescriptors::get();
        assert_eq!(
            descriptors.suspendable(),
            "Lco/paralleluniverse/fibers/Suspendable;"
        );
        assert_eq!(
            descriptors.instrumented(),
            "Lco/paralleluniverse/fibers/Instrumented;"
        );
        assert_eq!(
            descriptors.dont_instrument(),
            "Lco/paralleluniverse/fibers/instrument/DontInstrument;"
        );
    }

    #[test]
    fn descriptors_are_computed_once() {
        let first = MarkerDescriptors::get().suspendable();
        let second = Marker::Suspendable.descriptor();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn recognize_marker_descriptors() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_descriptor(marker.descriptor()), Some(marker));
        }
        assert_eq!(Marker::from_descriptor("Lco/paralleluniverse/fibers/Suspendable"), None);
        assert_eq!(Marker::from_descriptor("co/paralleluniverse/fibers/Suspendable"), None);
        assert_eq!(Marker::from_descriptor("Ljava/lang/Deprecated;"), None);
    }

    #[test]
    fn collect_markers() {
        let markers = Markers::from_descriptors([
            "Ljava/lang/Deprecated;",
            "Lco/paralleluniverse/fibers/Suspendable;",
            "Lco/paralleluniverse/fibers/Instrumented;",
        ]);
        assert_eq!(markers, Markers::SUSPENDABLE | Markers::INSTRUMENTED);
        assert!(!markers.contains(Markers::DONT_INSTRUMENT));
        assert!(Markers::from_descriptors(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn suspend_execution_in_throws_clause() {
        assert!(throws_suspend_execution(&[
            BinaryName::OBJECT,
            BinaryName::SUSPENDEXECUTION
        ]));
        assert!(!throws_suspend_execution(&[BinaryName::RUNTIMESUSPENDEXECUTION]));
        assert!(!throws_suspend_execution(std::iter::empty::<&BinaryName>()));
    }
}
