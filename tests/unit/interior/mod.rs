pub mod connect;
pub mod critical;
pub mod populate;
