mod error;
pub use error::{RenderError, Result};

mod node;
pub use node::{Element, Key, Keyed, Node};

mod composer;
pub use composer::{Composer, NodeId};

mod scope;
pub use scope::{Root, Scope};

mod props;
pub use props::{Drinkers, Guest, GuestCount, Quantities};

mod config;
pub use config::{AppConfig, RecipeSection, Wrapper};

pub mod html;

pub mod chai;
pub use chai::Chai;

pub mod purity;

pub mod utils;

mod map;
