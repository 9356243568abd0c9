use crate::{
    component::{ComponentOptions, RootComponent},
    dom::Document,
    error::{Result, StartupError},
    startup::HookInstalled,
};

/// The element the root component is bound to.
pub struct AttachmentPoint<E> {
    pub selector: String,
    pub element: E,
}

impl<E> AttachmentPoint<E> {
    pub fn resolve<D>(document: &D, selector: &str) -> Result<Self>
    where
        D: Document<Element = E>,
    {
        let element = document
            .query_selector(selector)
            .map_err(|source| StartupError::AttachmentPointLookup {
                selector: selector.to_owned(),
                source,
            })?
            .ok_or_else(|| StartupError::AttachmentPointNotFound {
                selector: selector.to_owned(),
            })?;
        Ok(Self {
            selector: selector.to_owned(),
            element,
        })
    }
}

/// Resolves the attachment point and constructs `C` bound to it.
///
/// Requires the panic hook to be in place; the document is left untouched
/// unless the attachment point resolves.
pub fn mount<D, C>(_hook: &HookInstalled, document: &D, selector: &str) -> Result<C>
where
    D: Document,
    C: RootComponent<D::Element>,
{
    let point = AttachmentPoint::resolve(document, selector)?;
    log::debug!("attachment point `{}` resolved", point.selector);
    C::new(ComponentOptions {
        target: point.element,
    })
    .map_err(StartupError::ComponentConstruction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadlessDocument;

    #[test]
    fn resolve_finds_element() {
        let doc = HeadlessDocument::with_attachment_point("app");
        let point = AttachmentPoint::resolve(&doc, "#app").unwrap();
        assert_eq!(point.selector, "#app");
        assert_eq!(point.element.attr("id").as_deref(), Some("app"));
    }

    #[test]
    fn resolve_reports_missing_element() {
        let doc = HeadlessDocument::with_attachment_point("root");
        match AttachmentPoint::resolve(&doc, "#app") {
            Err(StartupError::AttachmentPointNotFound { selector }) => assert_eq!(selector, "#app"),
            _ => panic!("expected AttachmentPointNotFound"),
        }
    }

    #[test]
    fn resolve_reports_rejected_lookup() {
        let doc = HeadlessDocument::with_attachment_point("app");
        assert!(matches!(
            AttachmentPoint::resolve(&doc, "div#app > p"),
            Err(StartupError::AttachmentPointLookup { .. })
        ));
    }
}
