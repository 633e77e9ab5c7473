mod get_follow_state_query;
mod get_follow_state_use_case;

pub use get_follow_state_query::GetFollowStateQuery;
pub use get_follow_state_use_case::GetFollowStateUseCase;

#[cfg(test)]
mod get_follow_state_use_case_test;
