#![no_std]

pub mod coin;
pub mod ttl;
