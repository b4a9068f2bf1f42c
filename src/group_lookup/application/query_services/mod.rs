pub mod group_membership_lookup_query_service_impl;
