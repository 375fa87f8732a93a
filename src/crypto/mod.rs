pub mod bit_codec;
pub mod permutation;
pub mod des_tables;
pub mod sbox;
pub mod key_expansion;
pub mod des_key_expansion;
pub mod encryption_transformation;
pub mod des_transformation;
pub mod feistel_network;
pub mod des;
pub mod cbc;
pub mod cipher_context;
pub mod cipher_types;
pub mod error;
mod cipher_io;
