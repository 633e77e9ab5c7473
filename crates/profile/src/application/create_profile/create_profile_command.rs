// crates/profile/src/application/create_profile/create_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{AccountId, Url};
use crate::domain::value_objects::{Bio, DisplayName, Handle};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfileCommand {
    pub account_id: AccountId,
    pub display_name: DisplayName,
    pub handle: Handle,
    pub bio: Option<Bio>,
    pub avatar_url: Option<Url>,
}
