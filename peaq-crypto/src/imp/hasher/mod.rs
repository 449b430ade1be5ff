pub mod blake2;
