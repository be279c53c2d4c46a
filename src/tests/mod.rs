mod config;
mod probes;
mod validation;
