//! Flyweight: many restaurants, few addresses, one copy of each address

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::printer::Printer;
use crate::vignette::{Category, Vignette};

/// The shared half of a map entry. Addresses repeat across restaurants,
/// so they are stored once and handed out behind `Rc`.
struct Address {
    country: String,
    city: String,
    postal_code: String,
    address_line: String,
}

impl Address {
    fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        address_line: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            address_line: address_line.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} / {} / {} / {}]",
            self.country, self.city, self.postal_code, self.address_line
        )
    }
}

/// The unique half of a map entry.
struct Restaurant {
    name: String,
    kind: String,
}

impl Restaurant {
    fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} / {}]", self.name, self.kind)
    }
}

/// Holds a shared address and works with the unique state it is given.
#[derive(Clone)]
struct Flyweight {
    address: Rc<Address>,
}

impl Flyweight {
    fn serve(&self, restaurant: &Restaurant, out: &mut Printer<'_>) -> Result<()> {
        out.quote(format!(
            "FlyWeight operation: shared ({}) and unique ({}) state.",
            self.address, restaurant
        ))
    }
}

/// Hands out flyweights, reusing an existing one whenever the address is
/// already known.
struct FlyweightFactory {
    flyweights: BTreeMap<String, Flyweight>,
}

impl FlyweightFactory {
    fn new(addresses: impl IntoIterator<Item = Address>) -> Self {
        let flyweights = addresses
            .into_iter()
            .map(|address| {
                (
                    Self::key(&address),
                    Flyweight {
                        address: Rc::new(address),
                    },
                )
            })
            .collect();
        Self { flyweights }
    }

    fn key(address: &Address) -> String {
        format!(
            "{}_{}_{}_{}",
            address.country, address.postal_code, address.city, address.address_line
        )
    }

    fn flyweight(&mut self, address: Address, out: &mut Printer<'_>) -> Result<Flyweight> {
        match self.flyweights.entry(Self::key(&address)) {
            Entry::Occupied(slot) => {
                out.quote("FlyWeight Factory: the flyweight is found, reuse it.")?;
                Ok(slot.get().clone())
            }
            Entry::Vacant(slot) => {
                out.quote("FlyWeight Factory: cannot find a flyweight, creating a new one.")?;
                Ok(slot
                    .insert(Flyweight {
                        address: Rc::new(address),
                    })
                    .clone())
            }
        }
    }

    /// Counts distinct address allocations behind the stored flyweights.
    /// It must come out equal to the number of flyweights.
    fn shared_state_count(&self) -> usize {
        self.flyweights
            .values()
            .map(|flyweight| Rc::as_ptr(&flyweight.address))
            .collect::<BTreeSet<_>>()
            .len()
    }

    fn list(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(format!(
            "There are {} flyweights and {} shared states.",
            self.flyweights.len(),
            self.shared_state_count()
        ))?;
        for (index, flyweight) in self.flyweights.values().enumerate() {
            out.quote(format!("{}) {}", index + 1, flyweight.address))?;
        }
        Ok(())
    }
}

struct Listing {
    restaurant: Restaurant,
    address: Address,
}

impl Listing {
    fn new(name: &str, kind: &str, address: Address) -> Self {
        Self {
            restaurant: Restaurant::new(name, kind),
            address,
        }
    }
}

fn add_to_map(
    factory: &mut FlyweightFactory,
    listing: Listing,
    out: &mut Printer<'_>,
) -> Result<()> {
    out.plain("Adding a restaurant to the map...")?;
    let flyweight = factory.flyweight(listing.address, out)?;
    flyweight.serve(&listing.restaurant, out)
}

/// Flyweight, told as a restaurant map that stores each address once.
pub struct FlyweightVignette;

impl Vignette for FlyweightVignette {
    fn name(&self) -> &'static str {
        "Flyweight"
    }

    fn key(&self) -> &'static str {
        "flyweight"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn narrate(&self, out: &mut Printer<'_>) -> Result<()> {
        out.quote(
            "We are going to develop an app for ramen lovers. We will map \
             the best restaurants in the country. Obviouly, each restaurant \
             has 2 types of data: shared data (its address) and unique data \
             (its name and type). To avoid duplicates and save memory \
             resourese we will use flyweighs.",
        )?;

        out.plain("Creating the factory")?;
        let mut factory = FlyweightFactory::new([
            Address::new("Russia", "Moscow", "103132", "The Kremlin"),
            Address::new("Russia", "St. Petersburg", "190000", "Saint Isaac's Cathedral"),
            Address::new("Russia", "Moscow", "109651", "Pererva, 42"),
        ]);
        factory.list(out)?;

        add_to_map(
            &mut factory,
            Listing::new(
                "Best-Ramen",
                "Ramen",
                Address::new("Russia", "Moscow", "109651", "Pererva, 42"),
            ),
            out,
        )?;

        add_to_map(
            &mut factory,
            Listing::new(
                "Ku-Ramen",
                "Ramen",
                Address::new("Russia", "Moscow", "123456", "Untitled street, 42"),
            ),
            out,
        )?;
        add_to_map(
            &mut factory,
            Listing::new(
                "Best-Gyoza",
                "Gyoza",
                Address::new("Russia", "Moscow", "123456", "Untitled street, 42"),
            ),
            out,
        )?;
        add_to_map(
            &mut factory,
            Listing::new(
                "Best-Udon",
                "Udon",
                Address::new("Russia", "Moscow", "123456", "Untitled street, 42"),
            ),
            out,
        )?;

        factory.list(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn narrated() -> String {
        let mut buf = Vec::new();
        {
            let mut out = Printer::new(&mut buf);
            FlyweightVignette.narrate(&mut out).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_same_address_shares_one_allocation() {
        let mut buf = Vec::new();
        let mut out = Printer::new(&mut buf);
        let mut factory = FlyweightFactory::new([]);

        let first = factory
            .flyweight(Address::new("Japan", "Tokyo", "160-0023", "Omoide Yokocho"), &mut out)
            .unwrap();
        let second = factory
            .flyweight(Address::new("Japan", "Tokyo", "160-0023", "Omoide Yokocho"), &mut out)
            .unwrap();

        assert!(Rc::ptr_eq(&first.address, &second.address));
        assert_eq!(factory.shared_state_count(), 1);
    }

    #[test]
    fn test_factory_grows_only_for_new_addresses() {
        let output = narrated();
        assert!(output.contains("There are 3 flyweights and 3 shared states."));
        assert!(output.contains("There are 4 flyweights and 4 shared states."));
        assert_eq!(
            output
                .matches("FlyWeight Factory: the flyweight is found, reuse it.")
                .count(),
            3
        );
        assert_eq!(
            output
                .matches("FlyWeight Factory: cannot find a flyweight, creating a new one.")
                .count(),
            1
        );
    }

    #[test]
    fn test_listing_is_sorted_by_shared_key() {
        let output = narrated();
        let tail = &output[output.rfind("There are 4").unwrap()..];
        assert!(tail.ends_with(concat!(
            "\n> 1) [Russia / Moscow / 103132 / The Kremlin]",
            "\n> 2) [Russia / Moscow / 109651 / Pererva, 42]",
            "\n> 3) [Russia / Moscow / 123456 / Untitled street, 42]",
            "\n> 4) [Russia / St. Petersburg / 190000 / Saint Isaac's Cathedral]",
        )));
    }

    #[test]
    fn test_every_restaurant_is_served_with_its_unique_state() {
        let output = narrated();
        for unique in [
            "[Best-Ramen / Ramen]",
            "[Ku-Ramen / Ramen]",
            "[Best-Gyoza / Gyoza]",
            "[Best-Udon / Udon]",
        ] {
            assert!(
                output.contains(&format!("and unique ({unique}) state.")),
                "missing {unique}"
            );
        }
    }
}
