//! Views: each owns one region of the status page and the fetches that
//! refresh it

pub mod gateway;
pub mod interfaces;

pub use gateway::GatewayView;
pub use interfaces::InterfaceStatusView;
