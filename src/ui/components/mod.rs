pub mod action_dialog;
pub mod data_table;
pub mod dropdown;
pub mod filter_bar;
pub mod pagination_bar;
