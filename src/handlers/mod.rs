//! HTTP request handlers.

pub mod block_page;

pub use block_page::block_page_handler;
