pub mod alpha;
pub mod batch;
pub mod bracket;
pub mod moduli;
pub mod series;
pub mod tail;
