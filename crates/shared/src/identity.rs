use uuid::Uuid;

/// The resolved caller identity. Whatever authentication layer fronts the
/// service resolves it before any operation runs; nothing below this type
/// reads ambient auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requester {
    pub user_id: Uuid,
    pub household_id: Option<Uuid>,
}

impl Requester {
    pub fn user(user_id: Uuid) -> Self {
        Self {
            user_id,
            household_id: None,
        }
    }

    pub fn household(user_id: Uuid, household_id: Uuid) -> Self {
        Self {
            user_id,
            household_id: Some(household_id),
        }
    }
}
