// crates/profile/src/application/update_profile/update_profile_command.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::{AccountId, Url};
use crate::domain::value_objects::{Bio, DisplayName, Handle};

/// Édition partielle : `None` laisse le champ intact.
/// Pour `bio` et `avatar_url`, `Some(None)` efface la valeur.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileCommand {
    pub account_id: AccountId,
    pub display_name: Option<DisplayName>,
    pub handle: Option<Handle>,
    pub bio: Option<Option<Bio>>,
    pub avatar_url: Option<Option<Url>>,
}

impl UpdateProfileCommand {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            ..Default::default()
        }
    }
}
