pub mod catalog;
pub mod chat_proxy;
pub mod templates;
