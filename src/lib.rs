pub mod actions;
pub mod app;
pub mod config;
pub mod consts;
pub mod context;
pub mod dispatcher;
pub mod errors;
pub mod handlers;
pub mod llm_client;
pub mod messages;
pub mod models;
pub mod speech;
pub mod system;
pub mod video;

#[cfg(test)]
mod test_utils;
