pub mod ntt;
pub mod prime;
pub mod sequence;
pub mod word;
pub mod zmod;
