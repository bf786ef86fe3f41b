// =============================================================================
// Admin Web - UI Components
// =============================================================================

pub mod common;
pub mod forms;
pub mod layout;

pub use common::{Button, ButtonVariant, Card, SubmissionStatus};
pub use forms::{Dropdown, TextArea, TextField};
pub use layout::Layout;
