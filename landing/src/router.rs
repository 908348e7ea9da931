//! Route holder and browser navigation listeners.
//!
//! [`Router`] owns the single current [`Route`]. Subscribers are called
//! synchronously every time a navigation re-parses the location.
//! [`NavigationListeners`] is the scoped registration of the `hashchange` and
//! `popstate` handlers that drive [`Router::refresh`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::{WindowListenerHandle, window_event_listener};

use crate::route::Route;

/// Where the current URL comes from.
pub trait LocationSource {
    /// `location.hash`, including the leading `#` when present.
    fn hash(&self) -> String;
    /// `location.pathname`.
    fn pathname(&self) -> String;
}

/// `window.location` of the running page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl LocationSource for BrowserLocation {
    fn hash(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }
}

type Subscriber = Box<dyn Fn(&Route)>;

/// Single owner of the current route.
///
/// Routes are never mutated in place; [`RouteHolder::replace`] swaps in a new
/// value and then notifies subscribers in the order they subscribed.
pub struct RouteHolder {
    current: Route,
    subscribers: Vec<Subscriber>,
}

impl RouteHolder {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&Route) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn replace(&mut self, next: Route) {
        self.current = next;
        for subscriber in &self.subscribers {
            subscriber(&self.current);
        }
    }
}

impl std::fmt::Debug for RouteHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteHolder")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Parses the location once on creation and again on every [`refresh`].
///
/// [`refresh`]: Router::refresh
#[derive(Debug)]
pub struct Router<L> {
    location: L,
    holder: RouteHolder,
}

impl<L: LocationSource> Router<L> {
    pub fn new(location: L) -> Self {
        let initial = Route::from_location(&location.hash(), &location.pathname());
        tracing::debug!(page = %initial.page, section = %initial.section, "initial route");
        Self {
            location,
            holder: RouteHolder::new(initial),
        }
    }

    pub fn current(&self) -> &Route {
        self.holder.current()
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&Route) + 'static) {
        self.holder.subscribe(subscriber);
    }

    /// Re-read the location and publish the result.
    pub fn refresh(&mut self) {
        let next = Route::from_location(&self.location.hash(), &self.location.pathname());
        tracing::debug!(page = %next.page, section = %next.section, "route changed");
        self.holder.replace(next);
    }
}

/// `hashchange` + `popstate` handlers sharing one callback.
///
/// Both handlers are removed when this value is dropped.
pub struct NavigationListeners {
    handles: Vec<WindowListenerHandle>,
}

impl NavigationListeners {
    pub fn attach(on_change: impl FnMut() + 'static) -> Self {
        let on_change = Rc::new(RefCell::new(on_change));

        let hashchange = {
            let on_change = Rc::clone(&on_change);
            window_event_listener(ev::hashchange, move |_| (&mut *on_change.borrow_mut())())
        };
        let popstate = {
            let on_change = Rc::clone(&on_change);
            window_event_listener(ev::popstate, move |_| (&mut *on_change.borrow_mut())())
        };

        tracing::debug!("navigation listeners attached");
        Self {
            handles: vec![hashchange, popstate],
        }
    }

    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for NavigationListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
        tracing::debug!("navigation listeners detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Page;
    use pretty_assertions::assert_eq;

    /// In-memory location whose hash can be changed between refreshes.
    #[derive(Clone, Default)]
    struct FakeLocation {
        hash: Rc<RefCell<String>>,
        pathname: Rc<RefCell<String>>,
    }

    impl FakeLocation {
        fn at(hash: &str, pathname: &str) -> Self {
            let location = Self::default();
            location.set_hash(hash);
            *location.pathname.borrow_mut() = pathname.to_string();
            location
        }

        fn set_hash(&self, hash: &str) {
            *self.hash.borrow_mut() = hash.to_string();
        }
    }

    impl LocationSource for FakeLocation {
        fn hash(&self) -> String {
            self.hash.borrow().clone()
        }

        fn pathname(&self) -> String {
            self.pathname.borrow().clone()
        }
    }

    #[test]
    fn initial_route_is_parsed_on_creation() {
        let router = Router::new(FakeLocation::at("#/docs?section=quickstart", "/"));
        assert_eq!(router.current(), &Route::new(Page::Docs, "quickstart"));
    }

    #[test]
    fn refresh_publishes_new_route() {
        let location = FakeLocation::at("", "/");
        let mut router = Router::new(location.clone());
        assert_eq!(router.current(), &Route::default());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        router.subscribe(move |route| sink.borrow_mut().push(route.clone()));

        location.set_hash("#/docs?s=commands");
        router.refresh();

        let expected = Route::new(Page::Docs, "commands");
        assert_eq!(router.current(), &expected);
        assert_eq!(*seen.borrow(), vec![expected]);
    }

    #[test]
    fn refresh_notifies_even_when_route_is_unchanged() {
        let mut router = Router::new(FakeLocation::at("#/docs", "/"));
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        router.subscribe(move |_| *counter.borrow_mut() += 1);

        router.refresh();
        router.refresh();

        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn subscribers_run_in_subscription_order() {
        let mut holder = RouteHolder::new(Route::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let order = Rc::clone(&order);
            holder.subscribe(move |_| order.borrow_mut().push(id));
        }

        holder.replace(Route::new(Page::Docs, "sdk"));

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn subscribers_see_the_replaced_value() {
        let mut holder = RouteHolder::new(Route::default());
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        holder.subscribe(move |route| *sink.borrow_mut() = Some(route.section.clone()));

        holder.replace(Route::new(Page::Docs, "nodes"));

        assert_eq!(seen.borrow().as_deref(), Some("nodes"));
        assert_eq!(holder.current().section, "nodes");
    }

    #[test]
    fn navigating_back_home_keeps_no_stale_section() {
        let location = FakeLocation::at("#/docs?section=sdk", "/");
        let mut router = Router::new(location.clone());

        location.set_hash("#/");
        router.refresh();

        assert_eq!(router.current(), &Route::default());
    }
}
