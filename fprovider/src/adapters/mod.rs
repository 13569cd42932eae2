pub mod canned;

#[cfg(feature = "provider-turing")]
pub mod turing;
