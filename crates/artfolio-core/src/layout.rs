//! Which interactive elements a page carries.
//!
//! The same controllers serve every page. A controller whose elements are
//! absent from a page is simply not attached there.

/// Independent handler groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    Navigation,
    PortfolioModal,
    ContactForm,
    NewsletterForm,
    ScrollReveal,
    DecorativeMotion,
}

/// Element inventory of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub name: &'static str,
    /// Ids reachable through `#id` links
    pub sections: &'static [&'static str],
    pub portfolio_modal: bool,
    pub contact_form: bool,
    pub success_dialog: bool,
    pub newsletter_form: bool,
    pub reveal_items: bool,
}

impl PageLayout {
    /// Controllers to attach, in initialization order.
    pub fn controllers(&self) -> Vec<Controller> {
        let mut wired = vec![Controller::Navigation];
        if self.portfolio_modal {
            wired.push(Controller::PortfolioModal);
        }
        if self.contact_form {
            wired.push(Controller::ContactForm);
        }
        if self.newsletter_form {
            wired.push(Controller::NewsletterForm);
        }
        if self.reveal_items {
            wired.push(Controller::ScrollReveal);
        }
        wired.push(Controller::DecorativeMotion);
        wired
    }

    pub fn has(&self, controller: Controller) -> bool {
        self.controllers().contains(&controller)
    }

    /// `Some(value)` when the page carries the controller's elements.
    pub fn attach<T>(&self, controller: Controller, value: T) -> Option<T> {
        self.has(controller).then_some(value)
    }
}

pub const PORTFOLIO_PAGE: PageLayout = PageLayout {
    name: "portfolio",
    sections: &["home", "gallery", "about", "art-club"],
    portfolio_modal: true,
    contact_form: false,
    success_dialog: false,
    newsletter_form: true,
    reveal_items: true,
};

pub const CONTACT_PAGE: PageLayout = PageLayout {
    name: "contact",
    sections: &["home", "contact-form", "details"],
    portfolio_modal: false,
    contact_form: true,
    success_dialog: true,
    newsletter_form: false,
    reveal_items: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_page_controllers() {
        let wired = PORTFOLIO_PAGE.controllers();
        assert!(wired.contains(&Controller::PortfolioModal));
        assert!(!wired.contains(&Controller::ContactForm));
        assert_eq!(wired.first(), Some(&Controller::Navigation));
    }

    #[test]
    fn test_attach_absent_is_inert() {
        assert_eq!(CONTACT_PAGE.attach(Controller::PortfolioModal, 1), None);
        assert_eq!(CONTACT_PAGE.attach(Controller::ContactForm, 1), Some(1));
    }
}
