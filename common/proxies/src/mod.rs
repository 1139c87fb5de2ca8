#![no_std]

pub mod proxy_collateral_swap;
pub mod proxy_exchange;
pub mod proxy_lending_market;
pub mod proxy_loan_provider;
