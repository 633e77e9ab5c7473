mod follow_toggle_controller;
mod follow_request_state;
mod follow_view;

pub use follow_toggle_controller::FollowController;
pub use follow_request_state::FollowRequestState;
pub use follow_view::FollowView;
