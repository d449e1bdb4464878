pub mod edit_service;
pub mod list_view;
pub mod query_service;
