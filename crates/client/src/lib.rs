//! Client core of MoodMeet: session, navigation and page state driven
//! through an [`Api`] implementation.

mod api;
mod card;
mod error;
mod feed;
mod forms;
mod http;
mod map;
mod nav;
mod preferences;
mod profile;
mod session;
mod shell;

#[cfg(test)]
mod mock;

pub use api::Api;
pub use card::{EventCard, IcebreakerModal, parse_starters};
pub use error::{ClientError, Result};
pub use feed::{EventFeed, FeedTicket, MyEvents};
pub use forms::{LoginForm, RegisterForm};
pub use http::HttpApi;
pub use map::MapPage;
pub use nav::{NavItem, Route, navbar};
pub use preferences::{CategoryPicker, PreferenceFlow, Step};
pub use profile::{Geolocator, ProfileEditor};
pub use session::{FileSessionStore, Session, SessionStore};
pub use shell::Shell;
