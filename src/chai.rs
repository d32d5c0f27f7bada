//! The spiced chai components.
//!
//! Every component here is a function of its props: the recipe of its
//! drinkers, a cup of its guest number, a list of cups of its count. Nothing
//! is read from or written to anywhere else.

use crate::html::Html;
use crate::{
    AppConfig, Composer, Drinkers, Guest, GuestCount, Keyed, Node, Result, Scope, Wrapper,
};

pub trait Chai {
    /// `<ol>` with the three recipe steps.
    fn recipe(&self, drinkers: Drinkers) -> Result<()>;

    /// `<h2>` labelling one guest's cup.
    fn cup(&self, guest: Guest) -> Result<()>;

    /// One cup per guest `1..=count`, each keyed by its guest number.
    fn cups(&self, count: GuestCount) -> Result<()>;
}

impl<S> Chai for Scope<S>
where
    S: 'static,
{
    fn recipe(&self, drinkers: Drinkers) -> Result<()> {
        let q = drinkers.quantities();
        self.ol(|s| {
            s.li(format!("Boil {} cups of water.", q.water_cups))?;
            s.li(format!(
                "Add {} spoons of tea and {} spoons of spice.",
                q.tea_spoons, q.spice_spoons
            ))?;
            s.li(format!(
                "Add {} cups of milk to boil and sugar to taste.",
                q.milk_cups
            ))
        })
    }

    fn cup(&self, guest: Guest) -> Result<()> {
        self.h2(format!("Tea cup for guest #{}", guest))
    }

    fn cups(&self, count: GuestCount) -> Result<()> {
        for guest in count.guests() {
            self.key(guest.get(), |s| s.cup(guest))?;
        }
        Ok(())
    }
}

/// Renders the recipe for `drinkers` people.
pub fn recipe(drinkers: f64) -> Result<Node> {
    let drinkers = Drinkers::try_from(drinkers)?;
    Composer::render(|s| s.recipe(drinkers)).map(single)
}

/// The recipe's steps as plain text, in order.
pub fn recipe_lines(drinkers: f64) -> Result<Vec<String>> {
    let list = recipe(drinkers)?;
    Ok(list.children().iter().map(Node::text_content).collect())
}

pub fn cup(guest: i64) -> Result<Node> {
    let guest = Guest::try_from(guest)?;
    Composer::render(|s| s.cup(guest)).map(single)
}

/// Renders `count` cups, keyed `1..=count` in ascending order.
pub fn cups(count: i64) -> Result<Vec<Keyed>> {
    let count = GuestCount::try_from(count)?;
    Composer::render(|s| s.cups(count)).map(Keyed::collect)
}

/// Renders the whole page described by `config`.
///
/// All recipes are validated before anything is built. With
/// [`Wrapper::Section`] the section element is returned, otherwise the
/// children come back as a fragment.
pub fn app(config: &AppConfig) -> Result<Node> {
    let amounts = config.validate()?;
    match config.wrapper {
        Wrapper::Section => {
            Composer::render(|s| s.section(|s| app_body(s, config, &amounts))).map(single)
        }
        Wrapper::Fragment => Composer::render(|s| app_body(s, config, &amounts)),
    }
}

fn app_body<S>(s: Scope<S>, config: &AppConfig, amounts: &[Drinkers]) -> Result<()>
where
    S: 'static,
{
    if let Some(title) = &config.title {
        s.h1(title.as_str())?;
    }
    for (section, drinkers) in config.recipes.iter().zip(amounts) {
        s.h2(section.heading.as_str())?;
        s.recipe(*drinkers)?;
    }
    s.cups(GuestCount::from(config.guests))
}

fn single(fragment: Node) -> Node {
    let mut children = fragment.into_children();
    match children.len() {
        1 => children.remove(0),
        _ => Node::Fragment(children),
    }
}
