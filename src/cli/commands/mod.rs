pub mod list;
pub mod sort_token;
