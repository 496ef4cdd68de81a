//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section components render slices of `PageModel` passed in as props.
//! Interactive chrome reads `Memo<Chrome>` and writes through
//! `Callback<Action>`, both provided by `App`.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod nav_anchor;
pub mod projects;
pub mod resume_preview_modal;
pub mod resume_section;
pub mod section_heading;
pub mod site_footer;
pub mod site_header;
pub mod tech_stack;
