mod get_profile_query;
mod get_profile_use_case;

pub use get_profile_query::GetProfileQuery;
pub use get_profile_use_case::GetProfileUseCase;
