//! Supporting library for the design-pattern demo binaries.
//!
//! Only the interpreter demo has enough machinery to warrant a library:
//! the other demos are self-contained binaries under `src/bin/`.

pub mod interpreter;
