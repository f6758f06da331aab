//! The house catalogue: every vignette in serving order, plus keyed lookup

use crate::error::{NarrationError, Result};
use crate::patterns::behavioral::{
    ChainOfResponsibilityVignette, CommandVignette, InterpreterVignette, IteratorVignette,
    MediatorVignette, MementoVignette, ObserverVignette, StateVignette, StrategyVignette,
    TemplateMethodVignette, VisitorVignette,
};
use crate::patterns::creational::{
    AbstractFactoryVignette, BuilderVignette, FactoryMethodVignette, PrototypeVignette,
    SingletonVignette,
};
use crate::patterns::structural::{
    AdapterVignette, BridgeVignette, CompositeVignette, DecoratorVignette, FacadeVignette,
    FlyweightVignette, ProxyVignette,
};
use crate::vignette::Vignette;

/// The full tasting menu in serving order: creational, then structural,
/// then behavioral, each group in its classic catalogue order.
pub fn menu() -> Vec<Box<dyn Vignette>> {
    vec![
        Box::new(FactoryMethodVignette),
        Box::new(AbstractFactoryVignette),
        Box::new(BuilderVignette),
        Box::new(PrototypeVignette),
        Box::new(SingletonVignette),
        Box::new(AdapterVignette),
        Box::new(BridgeVignette),
        Box::new(CompositeVignette),
        Box::new(DecoratorVignette),
        Box::new(FacadeVignette),
        Box::new(FlyweightVignette),
        Box::new(ProxyVignette),
        Box::new(ChainOfResponsibilityVignette),
        Box::new(CommandVignette),
        Box::new(InterpreterVignette),
        Box::new(IteratorVignette),
        Box::new(MediatorVignette),
        Box::new(MementoVignette),
        Box::new(ObserverVignette),
        Box::new(StateVignette),
        Box::new(StrategyVignette),
        Box::new(TemplateMethodVignette),
        Box::new(VisitorVignette),
    ]
}

/// Look a vignette up by its kebab-case key.
pub fn find(key: &str) -> Result<Box<dyn Vignette>> {
    menu()
        .into_iter()
        .find(|vignette| vignette.key() == key)
        .ok_or_else(|| NarrationError::UnknownVignette(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vignette::Category;

    #[test]
    fn test_menu_has_all_twenty_three_vignettes() {
        assert_eq!(menu().len(), 23);
    }

    #[test]
    fn test_menu_keys_are_unique() {
        let mut keys: Vec<&str> = menu().iter().map(|v| v.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 23);
    }

    #[test]
    fn test_menu_groups_categories_in_serving_order() {
        let categories: Vec<Category> = menu().iter().map(|v| v.category()).collect();
        let creational = categories
            .iter()
            .filter(|c| **c == Category::Creational)
            .count();
        let structural = categories
            .iter()
            .filter(|c| **c == Category::Structural)
            .count();
        assert_eq!(creational, 5);
        assert_eq!(structural, 7);
        assert_eq!(categories[..5], [Category::Creational; 5]);
        assert_eq!(categories[5..12], [Category::Structural; 7]);
        assert_eq!(categories[12..], [Category::Behavioral; 11]);
    }

    #[test]
    fn test_menu_opens_and_closes_as_published() {
        let menu = menu();
        assert_eq!(menu[0].key(), "factory-method");
        assert_eq!(menu[22].key(), "visitor");
    }

    #[test]
    fn test_find_returns_the_named_vignette() {
        let vignette = find("decorator").unwrap();
        assert_eq!(vignette.name(), "Decorator");
        assert_eq!(vignette.category(), Category::Structural);
    }

    #[test]
    fn test_find_rejects_a_key_not_on_the_menu() {
        let err = find("borscht").unwrap_err();
        assert!(matches!(err, NarrationError::UnknownVignette(ref key) if key == "borscht"));
        assert_eq!(err.to_string(), "no vignette named 'borscht' on the menu");
    }
}
