pub mod group_lookup_domain_error;
pub mod lookup_outcome;
