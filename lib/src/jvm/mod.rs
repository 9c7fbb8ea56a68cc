//! Binary-format names and descriptors of JVM classes and methods
//!
//! Names are kept in the internal form used inside class files, so `java.lang.Thread` is written
//! `java/lang/Thread`. Descriptors follow the grammar from
//! <https://docs.oracle.com/javase/specs/jvms/se16/html/jvms-4.html#jvms-4.3>:
//!
//! ```
//! use fiber_classify::jvm::*;
//!
//! let desc = MethodDescriptor::parse("(JI)V").unwrap();
//! assert_eq!(desc.parameters, vec![FieldType::Base(BaseType::Long), FieldType::Base(BaseType::Int)]);
//! assert_eq!(BinaryName::THREAD.descriptor(), "Ljava/lang/Thread;");
//! ```

mod descriptors;
mod errors;
mod names;

pub use descriptors::*;
pub use errors::*;
pub use names::*;
