/// What we know about the page asking for a promo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// Name of the site the page belongs to, if any.
    pub post_site: Option<String>,
}

impl PageContext {
    /// A page that is not scoped to a single site (front page, multis, ...).
    pub fn frontpage() -> Self {
        Self::default()
    }

    pub fn for_site(name: impl Into<String>) -> Self {
        Self {
            post_site: Some(name.into()),
        }
    }

    pub fn post_site(&self) -> Option<&str> {
        self.post_site.as_deref()
    }
}
