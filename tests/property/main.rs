// tests/property/main.rs

mod duration_grammar;
mod relay_partition;
