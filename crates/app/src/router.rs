//! Section routing
//!
//! Exactly one top-level section is visible at a time. The router is a
//! flat selector, not a guarded state machine: any section is reachable
//! from any other, and activating the current section is a no-op.

/// A mutually-exclusive top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Products,
    Detail,
    PurchaseHistory,
    Register,
    Login,
}

impl Section {
    /// Parse a section name. Accepts both the short hash names and the
    /// long element-id forms; unknown names yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "home" | "home-section" => Some(Self::Home),
            "products" | "products-section" => Some(Self::Products),
            "detail" | "product-detail" | "product-detail-section" => Some(Self::Detail),
            "purchase-history" | "purchase-history-section" => Some(Self::PurchaseHistory),
            "register" | "register-section" => Some(Self::Register),
            "login" | "login-section" => Some(Self::Login),
            _ => None,
        }
    }

    /// Label shown on the matching navigation entry
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::Detail => "Product Details",
            Self::PurchaseHistory => "Purchase History",
            Self::Register => "Register",
            Self::Login => "Login",
        }
    }
}

/// Tracks which section is visible
#[derive(Debug)]
pub struct ViewRouter {
    active: Section,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            active: Section::Home,
        }
    }

    /// Activate a section, deactivating every other one
    pub fn activate(&mut self, section: Section) {
        self.active = section;
    }

    /// Activate a section by name. Unknown names are a silent no-op.
    pub fn activate_named(&mut self, raw: &str) {
        if let Some(section) = Section::parse(raw) {
            self.activate(section);
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Whether the given nav entry is the current one
    pub fn is_current(&self, section: Section) -> bool {
        self.active == section
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}
