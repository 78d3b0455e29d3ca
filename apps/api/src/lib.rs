pub mod client;
pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod plan;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
