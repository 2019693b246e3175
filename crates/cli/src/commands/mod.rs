pub mod demo;
pub mod scenario;
