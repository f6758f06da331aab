//! Observer: ramen fans hear about restocks the moment they happen

use std::rc::Rc;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

trait Observer {
    fn update(&self, message: &str, out: &mut Printer<'_>) -> Result<()>;
}

struct RamenFan {
    name: String,
}

impl RamenFan {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    fn visit_restaurant(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote("I'm going to visit a ramen restaurant immideately!")
    }
}

impl Observer for RamenFan {
    fn update(&self, _message: &str, out: &mut Printer<'_>) -> Result<()> {
        out.plain(format!(
            "A ramen fan named {} received a message from the Observer.",
            self.name
        ))?;
        self.visit_restaurant(out)
    }
}

/// Subject. Fans attach to the restaurant and every stock event reaches
/// all of them in attach order.
#[derive(Default)]
struct Restaurant {
    observers: Vec<Rc<dyn Observer>>,
    message: String,
}

impl Restaurant {
    fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    #[allow(dead_code)]
    fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers
            .retain(|attached| !Rc::ptr_eq(attached, observer));
    }

    fn restore_ramen_stocks(&mut self, out: &mut Printer<'_>) -> Result<()> {
        out.plain("Ramen stocks restored!")?;
        self.message = String::from("Ramen stocks restored");
        self.notify(out)
    }

    fn notify(&self, out: &mut Printer<'_>) -> Result<()> {
        for observer in &self.observers {
            observer.update(&self.message, out)?;
        }
        Ok(())
    }
}

/// Observer, told as fans subscribing to ramen restock news.
pub struct ObserverVignette;

impl Vignette for ObserverVignette {
    fn name(&self) -> &'static str {
        "Observer"
    }

    fn key(&self) -> &'static str {
        "observer"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "Due to the global crisis, the country ran out of stocks of \
             ramen. But when the stocks are restored, we want to notify our \
             customers immediately.",
        )?;

        let mut restaurant = Restaurant::default();
        restaurant.attach(Rc::new(RamenFan::new("Nik")));
        restaurant.attach(Rc::new(RamenFan::new("Alex")));

        restaurant.restore_ramen_stocks(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fan_is_notified_in_attach_order() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            let mut restaurant = Restaurant::default();
            restaurant.attach(Rc::new(RamenFan::new("Nik")));
            restaurant.attach(Rc::new(RamenFan::new("Alex")));
            restaurant.restore_ramen_stocks(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            concat!(
                "\nRamen stocks restored!",
                "\nA ramen fan named Nik received a message from the Observer.",
                "\n> I'm going to visit a ramen restaurant immideately!",
                "\nA ramen fan named Alex received a message from the Observer.",
                "\n> I'm going to visit a ramen restaurant immideately!",
            )
        );
    }

    #[test]
    fn test_detached_fan_hears_nothing() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            let mut restaurant = Restaurant::default();
            let nik: Rc<dyn Observer> = Rc::new(RamenFan::new("Nik"));
            restaurant.attach(Rc::clone(&nik));
            restaurant.attach(Rc::new(RamenFan::new("Alex")));
            restaurant.detach(&nik);
            restaurant.restore_ramen_stocks(&mut out).unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert!(!output.contains("Nik"));
        assert!(output.contains("Alex"));
    }

    #[test]
    fn test_restock_with_no_fans_only_announces() {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            Restaurant::default()
                .restore_ramen_stocks(&mut out)
                .unwrap();
        }
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output, "\nRamen stocks restored!");
    }
}
