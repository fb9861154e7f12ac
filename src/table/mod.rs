pub mod audit;
pub mod cert;
pub mod plot;
