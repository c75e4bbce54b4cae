// src/services/mod.rs
pub mod chatbot;
pub mod gemini;
pub mod generator;
