// tests/property/main.rs

mod layout;
