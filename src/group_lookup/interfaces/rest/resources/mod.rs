pub mod group_lookup_page_query_resource;
