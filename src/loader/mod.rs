pub mod network_input;
pub mod parser;
