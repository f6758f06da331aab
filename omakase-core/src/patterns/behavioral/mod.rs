//! Behavioral patterns: who talks to whom while the ramen is cooking

pub mod chain_of_responsibility;
pub mod command;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template_method;
pub mod visitor;

pub use chain_of_responsibility::ChainOfResponsibilityVignette;
pub use command::CommandVignette;
pub use interpreter::InterpreterVignette;
pub use iterator::IteratorVignette;
pub use mediator::MediatorVignette;
pub use memento::MementoVignette;
pub use observer::ObserverVignette;
pub use state::StateVignette;
pub use strategy::StrategyVignette;
pub use template_method::TemplateMethodVignette;
pub use visitor::VisitorVignette;
