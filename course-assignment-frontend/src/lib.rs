//! Browser-side model of the course assignment page. Nothing in here does I/O.

pub mod drag;
pub mod element_id;
pub mod error;
pub mod form;
pub mod navigation;
pub mod page;
pub mod prio_input;

pub use course_assignment_config::UiConfig;
