//! Client-side state models.
//!
//! DESIGN
//! ======
//! The profile record is read-only content owned by the `profile` crate; this
//! module only holds the transient presentation flags that change at runtime.

pub mod view;
