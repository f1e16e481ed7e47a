// Application layer - use cases shared by every presentation surface.
// The form page and the dashboard both go through ExpenseService so that
// add/remove/summarize logic lives in exactly one place.

pub mod error;
pub mod input;
pub mod reporting;
pub mod service;

pub use error::*;
pub use input::*;
pub use reporting::*;
pub use service::*;
