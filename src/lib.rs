//! llm-echo - Mock LLM chat API
//!
//! This library provides an HTTP service that mimics an LLM chat completion
//! endpoint by echoing back the last message of a submitted conversation.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod telemetry;
