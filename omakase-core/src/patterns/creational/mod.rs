//! Object creation vignettes

pub mod abstract_factory;
pub mod builder;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

pub use abstract_factory::AbstractFactoryVignette;
pub use builder::BuilderVignette;
pub use factory_method::FactoryMethodVignette;
pub use prototype::PrototypeVignette;
pub use singleton::SingletonVignette;
