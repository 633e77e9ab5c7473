mod toggle_follow_command;
mod toggle_follow_use_case;

pub use toggle_follow_command::ToggleFollowCommand;
pub use toggle_follow_use_case::ToggleFollowUseCase;

#[cfg(test)]
mod toggle_follow_use_case_test;
