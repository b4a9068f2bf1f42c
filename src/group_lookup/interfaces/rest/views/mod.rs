pub mod group_lookup_page_view;
