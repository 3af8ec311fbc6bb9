mod common;
mod gemini;
mod scoring;
