#![no_std]

pub mod proxy_comptroller;
pub mod proxy_money_market;
pub mod proxy_price_oracle;
