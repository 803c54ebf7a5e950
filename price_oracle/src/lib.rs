#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod storage;
pub mod views;

/// Administrator-set price feed for the underlying of every money market.
///
/// Prices are keyed by pool address and expressed in USD per whole unit of the underlying,
/// scaled by WAD. The oracle starts paused and has to be unpaused by its owner.
#[multiversx_sc::contract]
pub trait PriceOracle:
    multiversx_sc_modules::pause::PauseModule
    + common_events::EventsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
}
