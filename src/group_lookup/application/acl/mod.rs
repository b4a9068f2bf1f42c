pub mod graph_directory_facade_impl;
