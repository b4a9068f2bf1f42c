pub mod group_membership;
