use crate::{dom::Element, error::ComponentError};

pub struct ComponentOptions<E: Element> {
    pub target: E,
}

/// A top-level UI object constructed once and bound to its target.
pub trait RootComponent<E: Element>: Sized {
    fn new(options: ComponentOptions<E>) -> Result<Self, ComponentError>;
}
