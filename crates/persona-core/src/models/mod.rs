pub mod configuration;
pub mod dna;
