//! Storefront controller.
//!
//! Thin adapter between the UI layer and the cart/checkout core. UI events
//! arrive as [`Action`]s; each dispatch runs the corresponding mutation,
//! which persists synchronously, and returns a fresh [`RenderState`] for
//! the UI to apply. Rejected actions leave all state untouched and carry a
//! user-facing message instead.

use std::time::Instant;

use tracing::debug;

use crate::actions::Action;
use crate::cart::CartEngine;
use crate::checkout::{CheckoutFlow, Order, Phase, TransitionError};
use crate::config::StorefrontConfig;
use crate::forms::{FieldErrors, validate_contact_form};
use crate::store::CartStore;
use crate::timers::{DeferredAction, Scheduler, TaskKey};
use crate::views::{Badge, CartView, CheckoutView};

/// A rejected action: a user-facing blocking message, no state change.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// A checkout-flow guard rejected the transition.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// The contact form failed validation.
    #[error("contact form is invalid")]
    ContactInvalid(FieldErrors),
}

/// Display data for the active modal, mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Cart(CartView),
    Checkout(CheckoutView),
    Success(Order),
}

/// Everything the UI layer needs to redraw after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub badge: Badge,
    pub modal: ModalView,
}

/// Owner of the whole subsystem state: cart engine, checkout flow, pending
/// deferred tasks, and the order currently on display.
pub struct Storefront<S> {
    engine: CartEngine<S>,
    flow: CheckoutFlow,
    scheduler: Scheduler,
    order: Option<Order>,
    config: StorefrontConfig,
}

impl<S: CartStore> Storefront<S> {
    /// Load the persisted cart and start with no modal shown.
    pub fn new(store: S, config: StorefrontConfig) -> Self {
        Self {
            engine: CartEngine::load(store),
            flow: CheckoutFlow::new(config.order_prefix.clone()),
            scheduler: Scheduler::new(),
            order: None,
            config,
        }
    }

    /// Dispatch one UI action.
    ///
    /// Mutation, store write, and view refresh run as one synchronous
    /// sequence: by the time the new [`RenderState`] is returned, the
    /// persisted record matches it.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] carrying the blocking user-facing message
    /// when a guard or validator fails. No state changes in that case.
    pub fn handle(&mut self, action: Action, now: Instant) -> Result<RenderState, Rejection> {
        match action {
            Action::AddItem(item) => {
                let id = item.id.clone();
                self.engine.add_item(item);
                self.scheduler.schedule(
                    TaskKey::AddButton(id.clone()),
                    now,
                    self.config.added_feedback,
                    DeferredAction::RevertAddButton(id),
                );
            }
            Action::ViewCart => self.flow.view_cart(),
            Action::CloseCart | Action::ContinueShopping | Action::CloseCheckout => {
                self.flow.close();
            }
            Action::UpdateQuantity { id, delta } => self.engine.update_quantity(&id, delta),
            Action::RemoveItem(id) => self.engine.remove_item(&id),
            Action::Checkout => self.flow.begin_checkout(&self.engine)?,
            Action::BackToCart => self.flow.back_to_cart(),
            Action::PlaceOrder(form) => {
                let order =
                    self.flow
                        .place_order(&mut self.engine, &form, self.config.delivery_fee)?;
                self.order = Some(order);
            }
            Action::CloseSuccess | Action::ClickOutside => {
                self.flow.close();
                // The order exists only for the success view.
                self.order = None;
            }
            Action::SubmitContactForm(form) => {
                validate_contact_form(&form).map_err(Rejection::ContactInvalid)?;
                debug!("Contact form accepted, simulating submission");
                self.scheduler.schedule(
                    TaskKey::ContactSubmit,
                    now,
                    self.config.contact_submit_delay,
                    DeferredAction::ShowContactSuccess,
                );
            }
        }
        Ok(self.render())
    }

    /// Pump due deferred tasks.
    ///
    /// Returns the actions the UI layer should apply now. Showing the
    /// contact success state schedules the follow-up form reset.
    pub fn tick(&mut self, now: Instant) -> Vec<DeferredAction> {
        let actions = self.scheduler.drain_due(now);
        if actions.contains(&DeferredAction::ShowContactSuccess) {
            self.scheduler.schedule(
                TaskKey::ContactReset,
                now,
                self.config.contact_reset_delay,
                DeferredAction::ResetContactForm,
            );
        }
        actions
    }

    /// Derive the current render surface.
    #[must_use]
    pub fn render(&self) -> RenderState {
        let modal = match self.flow.phase() {
            Phase::Hidden => ModalView::Hidden,
            Phase::Cart => ModalView::Cart(CartView::project(&self.engine, self.config.delivery_fee)),
            Phase::Checkout => {
                ModalView::Checkout(CheckoutView::project(&self.engine, self.config.delivery_fee))
            }
            Phase::Success => self
                .order
                .clone()
                .map_or(ModalView::Hidden, ModalView::Success),
        };
        RenderState {
            badge: Badge::project(&self.engine),
            modal,
        }
    }

    /// The checkout flow's current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.flow.phase()
    }

    /// Read-only access to the cart engine.
    #[must_use]
    pub const fn cart(&self) -> &CartEngine<S> {
        &self.engine
    }
}
