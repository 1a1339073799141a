//! Navigation port, so the store can move between routes without
//! knowing what renders them.

use crate::routes::Route;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
    fn current(&self) -> Route;
}
