#![no_std]

#[cfg(test)]
extern crate std;

mod auction_engine;
mod contract;
mod events;
pub mod msg;
mod payment;
pub mod storage;

pub use crate::contract::{ AuctionEngine, AuctionEngineClient };
