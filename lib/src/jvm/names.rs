use super::Error;
use std::borrow::Cow;
use std::fmt::{Debug, Error as FmtError, Formatter};

/// Names of methods, fields
///
/// See <https://docs.oracle.com/javase/specs/jvms/se16/html/jvms-4.html#jvms-4.2.2>
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct UnqualifiedName(Cow<'static, str>);

/// Names of classes and interfaces, in the slash-separated internal form (`java/lang/Thread`)
///
/// See <https://docs.oracle.com/javase/specs/jvms/se16/html/jvms-4.html#jvms-4.2.1>
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct BinaryName(Cow<'static, str>);

/// Extracts the raw underlying string name
impl AsRef<str> for UnqualifiedName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

/// Extracts the raw underlying string name
impl AsRef<str> for BinaryName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

/// Validated name of a class or member
pub trait Name: Sized {
    /// Check if a string would be a valid name, describing the problem if not
    fn check_valid(name: impl AsRef<str>) -> Result<(), String>;

    /// Extract the raw underlying string name
    fn as_str(&self) -> &str;

    /// Try to construct a name from a string, failing with `Error::InvalidName`
    fn from_string(name: String) -> Result<Self, Error>;
}

impl Name for UnqualifiedName {
    fn check_valid(name: impl AsRef<str>) -> Result<(), String> {
        let name = name.as_ref();
        if name.contains(&['.', ';', '[', '/'][..]) {
            Err(format!(
                "Unqualified name '{}' contains an illegal character",
                name
            ))
        } else if name.is_empty() {
            Err(format!("Unqualified name '{}' is empty", name))
        } else {
            Ok(())
        }
    }

    fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    fn from_string(name: String) -> Result<Self, Error> {
        Self::check_valid(&name).map_err(Error::InvalidName)?;
        Ok(UnqualifiedName(Cow::Owned(name)))
    }
}

impl Name for BinaryName {
    fn check_valid(name: impl AsRef<str>) -> Result<(), String> {
        let name = name.as_ref();
        if name.is_empty() {
            Err(format!("Binary name '{}' is empty", name))
        } else {
            name.split('/').map(UnqualifiedName::check_valid).collect()
        }
    }

    fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    fn from_string(name: String) -> Result<Self, Error> {
        Self::check_valid(&name).map_err(Error::InvalidName)?;
        Ok(BinaryName(Cow::Owned(name)))
    }
}

impl Debug for UnqualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.0.as_ref())
    }
}
impl Debug for BinaryName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(self.0.as_ref())
    }
}

impl UnqualifiedName {
    const fn name(value: &'static str) -> UnqualifiedName {
        UnqualifiedName(Cow::Borrowed(value))
    }

    // JDK blocking primitives
    pub const JOIN: Self = Self::name("join");
    pub const SLEEP: Self = Self::name("sleep");
    pub const WAIT: Self = Self::name("wait");

    // Fiber suspension primitives
    pub const PARK: Self = Self::name("park");
    pub const PARKANDSERIALIZE: Self = Self::name("parkAndSerialize");
    pub const PARKANDUNPARK: Self = Self::name("parkAndUnpark");
    pub const YIELD: Self = Self::name("yield");
    pub const YIELDANDUNPARK: Self = Self::name("yieldAndUnpark");
}

impl BinaryName {
    const fn name(value: &'static str) -> BinaryName {
        BinaryName(Cow::Borrowed(value))
    }

    // JDK names
    pub const OBJECT: Self = Self::name("java/lang/Object");
    pub const THREAD: Self = Self::name("java/lang/Thread");

    // Fiber runtime names
    pub const FIBER: Self = Self::name("co/paralleluniverse/fibers/Fiber");
    pub const STRAND: Self = Self::name("co/paralleluniverse/strands/Strand");
    pub const SUSPENDEXECUTION: Self = Self::name("co/paralleluniverse/fibers/SuspendExecution");
    pub const RUNTIMESUSPENDEXECUTION: Self =
        Self::name("co/paralleluniverse/fibers/RuntimeSuspendExecution");

    // Marker annotations
    pub const SUSPENDABLE: Self = Self::name("co/paralleluniverse/fibers/Suspendable");
    pub const INSTRUMENTED: Self = Self::name("co/paralleluniverse/fibers/Instrumented");
    pub const DONTINSTRUMENT: Self =
        Self::name("co/paralleluniverse/fibers/instrument/DontInstrument");
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn binary_names_use_slashes() {
        assert!(BinaryName::from_string(String::from("java/lang/Thread")).is_ok());
        assert!(BinaryName::from_string(String::from("java.lang.Thread")).is_err());
        assert!(BinaryName::from_string(String::from("")).is_err());
        assert!(BinaryName::from_string(String::from("java//Thread")).is_err());
    }

    #[test]
    fn unqualified_names_reject_separators() {
        assert!(UnqualifiedName::from_string(String::from("sleep")).is_ok());
        assert!(UnqualifiedName::from_string(String::from("<init>")).is_ok());
        assert!(UnqualifiedName::from_string(String::from("a/b")).is_err());
        assert!(UnqualifiedName::from_string(String::from("a;")).is_err());
    }

    #[test]
    fn constants_compare_equal_to_parsed_names() {
        let parsed = BinaryName::from_string(String::from("co/paralleluniverse/fibers/Fiber"));
        assert_eq!(parsed.ok(), Some(BinaryName::FIBER));
        let parsed = UnqualifiedName::from_string(String::from("parkAndUnpark"));
        assert_eq!(parsed.ok(), Some(UnqualifiedName::PARKANDUNPARK));
    }

    fn validated<N: Name>(raw: &str) -> Option<String> {
        N::from_string(raw.to_owned())
            .ok()
            .map(|name| name.as_str().to_owned())
    }

    #[test]
    fn name_trait_returns_raw_string() {
        assert_eq!(
            validated::<BinaryName>("java/lang/Object").as_deref(),
            Some("java/lang/Object")
        );
        assert_eq!(validated::<UnqualifiedName>("wait").as_deref(), Some("wait"));
        assert!(matches!(
            BinaryName::from_string(String::from("[I")),
            Err(Error::InvalidName(_))
        ));
    }
}
