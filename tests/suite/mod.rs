mod config;
mod input;
