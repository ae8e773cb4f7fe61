mod state;
mod widget;

pub use state::ProjectListState;
pub use widget::{GridCard, ProjectListPage};
