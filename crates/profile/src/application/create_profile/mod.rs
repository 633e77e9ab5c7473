mod create_profile_command;
mod create_profile_use_case;

pub use create_profile_command::CreateProfileCommand;
pub use create_profile_use_case::CreateProfileUseCase;
