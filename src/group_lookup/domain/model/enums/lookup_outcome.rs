use crate::group_lookup::domain::model::{
    entities::group_membership::GroupMembership,
    enums::group_lookup_domain_error::GroupLookupDomainError,
};

/// Terminal state of one lookup invocation. `Empty` means the user resolved
/// but belongs to no groups, which is not a failure.
#[derive(Clone, Debug)]
pub enum LookupOutcome {
    Success(Vec<GroupMembership>),
    Empty,
    Failure(String),
}

impl LookupOutcome {
    /// Flattens the structured error into its user-facing message. This is
    /// the only place the error chain collapses to a string.
    pub fn from_result(result: Result<Vec<GroupMembership>, GroupLookupDomainError>) -> Self {
        match result {
            Ok(memberships) if memberships.is_empty() => Self::Empty,
            Ok(memberships) => Self::Success(memberships),
            Err(error) => Self::Failure(error.to_string()),
        }
    }
}
