use crate::{
    build_info,
    component::{ComponentOptions, RootComponent},
    dom::{Element, Node},
    error::{ComponentError, HostError},
};

pub const TITLE: &str = "Vite + Rust + WASM";

/// The application's root component.
pub struct App<E: Element> {
    target: E,
}

impl<E: Element> App<E> {
    pub fn target(&self) -> &E {
        &self.target
    }

    /// Removes everything under the attachment point.
    pub fn destroy(self) -> Result<(), HostError> {
        self.target.clear()
    }

    fn view() -> Node {
        Node::element("main")
            .attr("class", "app")
            .child(Node::element("h1").child(Node::text(TITLE)))
            .child(
                Node::element("footer")
                    .attr("class", "build-info")
                    .child(Node::text(build_info::summary())),
            )
    }
}

impl<E: Element> RootComponent<E> for App<E> {
    fn new(options: ComponentOptions<E>) -> Result<Self, ComponentError> {
        options.target.append(&Self::view())?;
        Ok(Self {
            target: options.target,
        })
    }
}
