//! VM details
//!
//! - view_model.rs: refresh and error dismissal commands
//! - view.rs: pane shown next to the list, and the standalone page

mod view;
mod view_model;

pub use view::{VmDetailPage, VmDetails};
pub use view_model::VmDetailsViewModel;
