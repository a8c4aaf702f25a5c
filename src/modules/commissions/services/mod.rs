pub mod commission_resolver;

pub use commission_resolver::{
    commission_rate, is_angola_method, platform_fee, seller_earning, seller_rate,
    ANGOLA_COMMISSION_RATE, DEFAULT_COMMISSION_RATE,
};
