// crates/profile/src/application/get_profile/get_profile_query.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::AccountId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileQuery {
    pub account_id: AccountId,
}
