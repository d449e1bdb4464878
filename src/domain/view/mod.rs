pub mod column;
pub mod dialog;
pub mod filter;
pub mod pagination;
pub mod reducer;
pub mod sort;
pub mod value;
