pub mod lookup_group_memberships_query;
