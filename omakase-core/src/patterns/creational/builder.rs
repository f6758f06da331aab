//! Builder: one menu line stands for a long list of order parameters

use std::fmt;
use std::mem;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// Soup base of a ramen order.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
enum RamenType {
    Shoyu,
    Shio,
    Miso,
    Tonkotsu,
}

impl fmt::Display for RamenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RamenType::Shoyu => "Shoyu",
            RamenType::Shio => "Shio",
            RamenType::Miso => "Miso",
            RamenType::Tonkotsu => "Tonkotsu",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy)]
enum Pungency {
    Mild,
    Hot,
}

impl fmt::Display for Pungency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Pungency::Mild => "Mild",
            Pungency::Hot => "Hot",
        };
        f.write_str(label)
    }
}

/// Gyoza portion. Zero pieces prints as "None".
#[derive(Debug, Clone, Copy, Default)]
struct Gyoza(u8);

impl fmt::Display for Gyoza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("None"),
            count => write!(f, "{count}"),
        }
    }
}

/// A ramen order with every parameter spelled out.
#[derive(Debug)]
struct Ramen {
    ramen_type: RamenType,
    pungency: Pungency,
    beverage: String,
    gyoza: Gyoza,
    weight: u16,
    euro_fork: bool,
}

impl Default for Ramen {
    fn default() -> Self {
        Self {
            ramen_type: RamenType::Shio,
            pungency: Pungency::Mild,
            beverage: String::new(),
            gyoza: Gyoza(0),
            weight: 500,
            euro_fork: false,
        }
    }
}

impl Ramen {
    fn set_type(&mut self, ramen_type: RamenType) -> &mut Self {
        self.ramen_type = ramen_type;
        self
    }

    fn set_pungency(&mut self, pungency: Pungency) -> &mut Self {
        self.pungency = pungency;
        self
    }

    fn set_beverage(&mut self, beverage: impl Into<String>) -> &mut Self {
        self.beverage = beverage.into();
        self
    }

    fn set_gyoza(&mut self, number: u8) -> &mut Self {
        self.gyoza = Gyoza(number);
        self
    }

    fn set_weight(&mut self, weight: u16) -> &mut Self {
        self.weight = weight;
        self
    }

    fn set_euro_fork(&mut self, need_fork: bool) -> &mut Self {
        self.euro_fork = need_fork;
        self
    }

    fn eat(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("This is my ramen:")?;
        out.plain(format!(
            "Type = {}, Weight = {}, Pungency = {}, Beverage = {}, Gyoza = {}, Fork = {}",
            self.ramen_type,
            self.weight,
            self.pungency,
            if self.beverage.is_empty() {
                "None"
            } else {
                self.beverage.as_str()
            },
            self.gyoza,
            if self.euro_fork { "Yes" } else { "No" },
        ))
    }
}

/// Builder steps the waiter walks through for any order.
trait RamenBuilder {
    fn build_base(&mut self);
    fn build_gyoza(&mut self);
    fn build_beverage(&mut self);
    fn finish(&mut self) -> Ramen;
}

#[derive(Default)]
struct DefaultRamen {
    ramen: Ramen,
}

impl RamenBuilder for DefaultRamen {
    fn build_base(&mut self) {
        self.ramen
            .set_type(RamenType::Shio)
            .set_weight(500)
            .set_pungency(Pungency::Mild)
            .set_euro_fork(false);
    }

    fn build_gyoza(&mut self) {
        self.ramen.set_gyoza(0);
    }

    fn build_beverage(&mut self) {
        self.ramen.set_beverage("Water");
    }

    fn finish(&mut self) -> Ramen {
        mem::take(&mut self.ramen)
    }
}

/// The default order with a fork on the side.
#[derive(Default)]
struct EuropeanRamen {
    inner: DefaultRamen,
}

impl RamenBuilder for EuropeanRamen {
    fn build_base(&mut self) {
        self.inner.build_base();
        self.inner.ramen.set_euro_fork(true);
    }

    fn build_gyoza(&mut self) {
        self.inner.build_gyoza();
    }

    fn build_beverage(&mut self) {
        self.inner.build_beverage();
    }

    fn finish(&mut self) -> Ramen {
        self.inner.finish()
    }
}

#[derive(Default)]
struct BigTonkotsuRamenWithGyozaAndBeer {
    ramen: Ramen,
}

impl RamenBuilder for BigTonkotsuRamenWithGyozaAndBeer {
    fn build_base(&mut self) {
        self.ramen
            .set_type(RamenType::Tonkotsu)
            .set_weight(1000)
            .set_pungency(Pungency::Hot)
            .set_euro_fork(false);
    }

    fn build_gyoza(&mut self) {
        self.ramen.set_gyoza(10);
    }

    fn build_beverage(&mut self) {
        self.ramen.set_beverage("Beer");
    }

    fn finish(&mut self) -> Ramen {
        mem::take(&mut self.ramen)
    }
}

/// Director: turns one menu line into builder steps in the right order.
struct Waiter {
    builder: Box<dyn RamenBuilder>,
}

impl Waiter {
    fn new(builder: Box<dyn RamenBuilder>) -> Self {
        Self { builder }
    }

    fn make_order(&mut self) -> Ramen {
        self.builder.build_base();
        self.builder.build_gyoza();
        self.builder.build_beverage();
        self.builder.finish()
    }
}

/// Builder, told as ordering by menu line instead of by parameter list.
pub struct BuilderVignette;

impl Vignette for BuilderVignette {
    fn name(&self) -> &'static str {
        "Builder"
    }

    fn key(&self) -> &'static str {
        "builder"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(
            "It's dinner time. I'm so hungry. I'm going to visit my favorite \
             ramen restaurant. They have so many possible options. \
             Fortunately, I don't need to explain to the waiter what I want \
             for each possible parameter. I can just use their menu.",
        )?;
        out.quote("[Me] I want to have a big tonkotsu ramen with gyoza and beer.")?;

        let mut waiter = Waiter::new(Box::new(BigTonkotsuRamenWithGyozaAndBeer::default()));
        let ramen = waiter.make_order();
        ramen.eat(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eaten(ramen: &Ramen) -> String {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            ramen.eat(&mut out).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bare_ramen_prints_none_for_missing_extras() {
        let ramen = Ramen::default();
        assert_eq!(
            eaten(&ramen),
            "\nThis is my ramen:\nType = Shio, Weight = 500, Pungency = Mild, \
             Beverage = None, Gyoza = None, Fork = No"
        );
    }

    #[test]
    fn test_waiter_serves_the_default_order() {
        let mut waiter = Waiter::new(Box::new(DefaultRamen::default()));
        let ramen = waiter.make_order();
        assert_eq!(
            eaten(&ramen),
            "\nThis is my ramen:\nType = Shio, Weight = 500, Pungency = Mild, \
             Beverage = Water, Gyoza = None, Fork = No"
        );
    }

    #[test]
    fn test_european_order_adds_a_fork() {
        let mut waiter = Waiter::new(Box::new(EuropeanRamen::default()));
        let ramen = waiter.make_order();
        assert!(eaten(&ramen).ends_with("Fork = Yes"));
    }

    #[test]
    fn test_big_tonkotsu_order() {
        let mut waiter = Waiter::new(Box::new(BigTonkotsuRamenWithGyozaAndBeer::default()));
        let ramen = waiter.make_order();
        assert_eq!(
            eaten(&ramen),
            "\nThis is my ramen:\nType = Tonkotsu, Weight = 1000, Pungency = Hot, \
             Beverage = Beer, Gyoza = 10, Fork = No"
        );
    }

    #[test]
    fn test_narration_orders_from_the_menu() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            BuilderVignette.narrate(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("> [Me] I want to have a big tonkotsu ramen"));
        assert!(output.ends_with(
            "Type = Tonkotsu, Weight = 1000, Pungency = Hot, \
             Beverage = Beer, Gyoza = 10, Fork = No"
        ));
    }
}
