//! cloudnaming - strict, deterministic validation of cloud resource names
//!
//! One validation function per resource-name kind, grouped per provider.
//! Validators are pure: no I/O, no shared mutable state, no side effects.

pub mod aws;
