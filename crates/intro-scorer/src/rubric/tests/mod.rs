mod common;
mod content;
mod engine;
