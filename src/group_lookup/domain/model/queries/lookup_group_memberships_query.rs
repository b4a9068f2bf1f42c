use crate::group_lookup::domain::model::{
    enums::group_lookup_domain_error::GroupLookupDomainError,
    value_objects::user_principal_name::UserPrincipalName,
};

#[derive(Clone, Debug)]
pub struct LookupGroupMembershipsQuery {
    user_principal_name: UserPrincipalName,
}

impl LookupGroupMembershipsQuery {
    pub fn new(user_principal_name: String) -> Result<Self, GroupLookupDomainError> {
        Ok(Self {
            user_principal_name: UserPrincipalName::new(user_principal_name)?,
        })
    }

    pub fn user_principal_name(&self) -> &UserPrincipalName {
        &self.user_principal_name
    }
}
