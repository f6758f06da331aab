//! Structural patterns: composing dishes, orders, and restaurants out of
//! smaller pieces

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

pub use adapter::AdapterVignette;
pub use bridge::BridgeVignette;
pub use composite::CompositeVignette;
pub use decorator::DecoratorVignette;
pub use facade::FacadeVignette;
pub use flyweight::FlyweightVignette;
pub use proxy::ProxyVignette;
