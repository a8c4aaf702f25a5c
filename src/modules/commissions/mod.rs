pub mod controllers;
pub mod services;

pub use services::{
    commission_rate, is_angola_method, platform_fee, seller_earning, seller_rate,
    ANGOLA_COMMISSION_RATE, DEFAULT_COMMISSION_RATE,
};
