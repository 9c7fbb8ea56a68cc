//! Classify the method calls of a JVM method body for fiber instrumentation
//!
//! Instrumentation rewrites ordinary call sequences so that a fiber can suspend in the middle of
//! them. Every invocation instruction it comes across is one of:
//!
//!   - a yield point (`Fiber.park` and friends) that has to become a suspend/resume boundary,
//!   - a call on `Strand`, whose blocking operations already cooperate with fibers,
//!   - a known thread-blocking primitive (`Thread.sleep`, `Thread.join`, `Object.wait`) that
//!     would pin the carrier thread and should be reported,
//!   - or anything else, which is not relevant.
//!
//! ```
//! use fiber_classify::classify::{classify, CallSite, Classification};
//!
//! let site = CallSite::new("java/lang/Thread", "sleep", "(J)V");
//! assert_eq!(classify(&site), Classification::DisallowedBlocking(0));
//! ```

pub mod classify;
pub mod jvm;
