//! Mediator: an ad agency relays orders between competing restaurants

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

#[derive(Debug, Clone, Copy)]
enum Meal {
    MisoRamen,
    #[allow(dead_code)]
    TonkotsuRamen,
    Udon,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Meal::MisoRamen => "Miso Ramen",
            Meal::TonkotsuRamen => "Tonkotsu Ramen",
            Meal::Udon => "Udon",
        };
        f.write_str(label)
    }
}

/// Identifies which colleague an order came from, so the mediator can
/// nudge everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Ramen,
    Udon,
}

trait Mediator {
    fn notify(&self, origin: Origin, meal: Meal, out: &mut Printer<'_>) -> Result<()>;
}

struct RamenRestaurant {
    name: &'static str,
}

impl RamenRestaurant {
    fn new() -> Self {
        Self {
            name: "Ramen Restaurant",
        }
    }

    fn order_miso_ramen(&self, mediator: &dyn Mediator, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Miso Ramen ordered from {}", self.name))?;
        mediator.notify(Origin::Ramen, Meal::MisoRamen, out)
    }

    #[allow(dead_code)]
    fn order_tonkotsu_ramen(&self, mediator: &dyn Mediator, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Tonkotsu Ramen ordered from {}", self.name))?;
        mediator.notify(Origin::Ramen, Meal::TonkotsuRamen, out)
    }

    fn suggest_bigger_ad_budget(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("{}: we should increase the ad budget.", self.name))
    }
}

struct UdonRestaurant {
    name: &'static str,
}

impl UdonRestaurant {
    fn new() -> Self {
        Self {
            name: "Udon Restaurant",
        }
    }

    fn order_udon(&self, mediator: &dyn Mediator, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Udon ordered from {}", self.name))?;
        mediator.notify(Origin::Udon, Meal::Udon, out)
    }

    fn suggest_bigger_ad_budget(&self, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("{}: we should increase the ad budget.", self.name))
    }
}

/// The agency knows both restaurants. When one of them takes an order,
/// the other one hears about lost clients.
struct AdAgency {
    ramen: Rc<RamenRestaurant>,
    udon: Rc<UdonRestaurant>,
}

impl Mediator for AdAgency {
    fn notify(&self, origin: Origin, meal: Meal, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!("Mediator notified that someone ordered {meal}"))?;

        if origin != Origin::Ramen {
            out.plain(
                "Mediator is notifying the Ramen restaurant that they're \
                 losing clients...",
            )?;
            self.ramen.suggest_bigger_ad_budget(out)?;
        }

        if origin != Origin::Udon {
            out.plain(
                "Mediator is notifying the Udon restaurant that they're  \
                 losing clients...",
            )?;
            self.udon.suggest_bigger_ad_budget(out)?;
        }

        Ok(())
    }
}

/// Mediator, told as an ad agency watching who orders where.
pub struct MediatorVignette;

impl Vignette for MediatorVignette {
    fn name(&self) -> &'static str {
        "Mediator"
    }

    fn key(&self) -> &'static str {
        "mediator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "We want to notify every restaurant when someone has ordered a \
             meal. If the restaurant sees others' orders, they will increase \
             their advertising budget and we will get more money :)",
        )?;

        let ramen = Rc::new(RamenRestaurant::new());
        let udon = Rc::new(UdonRestaurant::new());
        let agency = AdAgency {
            ramen: Rc::clone(&ramen),
            udon: Rc::clone(&udon),
        };

        ramen.order_miso_ramen(&agency, out)
    }
}
