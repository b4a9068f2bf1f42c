pub mod group_lookup_rest_controller;
