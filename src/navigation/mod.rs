//! Navigation routing: the closed destination set, its token codec and
//! the back stack.

mod destination;
mod router;
mod stack;

pub use destination::{Destination, DestinationKind};
pub use router::{decode, encode, matches, RouteError, RouteToken};
pub use stack::{BottomTab, NavigationStack};
