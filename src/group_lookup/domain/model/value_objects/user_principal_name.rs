use crate::group_lookup::domain::model::enums::group_lookup_domain_error::GroupLookupDomainError;

/// Email-like identifier addressing a directory user. The directory decides
/// whether the value actually resolves; only emptiness is rejected here.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserPrincipalName(String);

impl UserPrincipalName {
    pub fn new(value: String) -> Result<Self, GroupLookupDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(GroupLookupDomainError::InvalidUserPrincipalName);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
