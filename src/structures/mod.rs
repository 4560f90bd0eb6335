pub mod binary;
pub mod gf;
pub mod modint;
pub mod poly;
