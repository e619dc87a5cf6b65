use std::sync::Arc;

use chrono::Utc;

use shopfront_cart::{
    Cart, CartEvent, CartLine, CartTotals, ContactDetails, ContactRecord, ContactSink,
    CustomerDetails, OrderRecord, OrderSink, ReferenceSource, ThreadRngSource, place_order,
    submit_contact,
};
use shopfront_catalog::{
    Catalog, CategoryFilter, FilterState, Page, PriceBucket, Product, SearchOutcome, Service,
    SortKey,
};
use shopfront_core::{DomainResult, Money, ProductId};
use shopfront_events::{Event, EventBus, InMemoryEventBus, Subscription};

/// Default bus carrying cart-changed notifications.
pub type CartBus = InMemoryEventBus<CartEvent>;

/// Session state: catalog, cart, active filter and the cart-changed bus.
///
/// Constructed once at startup and handed to the presentation layer. All
/// mutations take `&mut self`; a multi-threaded host wraps the whole value in
/// a single `Mutex` so add/set-quantity lookups cannot interleave.
pub struct Storefront<B = CartBus>
where
    B: EventBus<CartEvent>,
{
    catalog: Catalog,
    cart: Cart,
    filter: FilterState,
    bus: Arc<B>,
    references: Box<dyn ReferenceSource + Send>,
}

impl Storefront<CartBus> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_bus(catalog, Arc::new(CartBus::new()))
    }
}

impl<B> Storefront<B>
where
    B: EventBus<CartEvent>,
{
    pub fn with_bus(catalog: Catalog, bus: Arc<B>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            filter: FilterState::default(),
            bus,
            references: Box::new(ThreadRngSource),
        }
    }

    /// Replace the random source used for order references.
    pub fn with_reference_source(mut self, source: impl ReferenceSource + Send + 'static) -> Self {
        self.references = Box::new(source);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn subscribe_cart_changes(&self) -> Subscription<CartEvent> {
        self.bus.subscribe()
    }

    // -- catalog views ------------------------------------------------------

    pub fn filter_by_category(&mut self, category: CategoryFilter) {
        tracing::debug!(%category, "category filter changed");
        self.filter.category = category;
    }

    pub fn filter_by_price(&mut self, price: PriceBucket) {
        tracing::debug!(%price, "price filter changed");
        self.filter.price = price;
    }

    pub fn sort_by(&mut self, sort: SortKey) {
        tracing::debug!(%sort, "sort changed");
        self.filter.sort = sort;
    }

    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Products for the main grid under the active filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.query(&self.filter)
    }

    /// One page of [`Storefront::visible_products`], numbered from 1.
    pub fn visible_page(&self, page: usize) -> Page<'_> {
        self.catalog.query_page(&self.filter, page)
    }

    pub fn featured_products(&self) -> Vec<&Product> {
        self.catalog.list_featured(self.catalog.config().featured_limit)
    }

    pub fn featured_services(&self) -> Vec<&Service> {
        self.catalog
            .list_featured_services(self.catalog.config().featured_services_limit)
    }

    pub fn search(&self, term: &str) -> SearchOutcome<'_> {
        self.catalog.search(term)
    }

    pub fn related_products(&self, id: &ProductId) -> DomainResult<Vec<&Product>> {
        self.catalog.related(id, self.catalog.config().related_limit)
    }

    pub fn low_stock(&self) -> Vec<&Product> {
        self.catalog.low_stock(self.catalog.config().low_stock_threshold)
    }

    /// Price with the configured currency label, e.g. `GHS 85.00`.
    pub fn format_price(&self, amount: Money) -> String {
        amount.display_with(&self.catalog.config().currency)
    }

    // -- cart ---------------------------------------------------------------

    pub fn add_to_cart(&mut self, id: &ProductId) -> DomainResult<CartTotals> {
        let event = self.cart.add(&self.catalog, id)?;
        let totals = event.totals();
        self.publish(event);
        Ok(totals)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> CartTotals {
        if let Some(event) = self.cart.remove(id) {
            self.publish(event);
        }
        self.cart.totals()
    }

    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> CartTotals {
        if let Some(event) = self.cart.set_quantity(id, quantity) {
            self.publish(event);
        }
        self.cart.totals()
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.total_item_count()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total_price()
    }

    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    // -- submissions --------------------------------------------------------

    /// Check out the current cart. See [`shopfront_cart::place_order`].
    pub fn place_order(
        &mut self,
        customer: CustomerDetails,
        sink: &mut dyn OrderSink,
    ) -> DomainResult<OrderRecord> {
        let checkout = place_order(
            &mut self.cart,
            customer,
            Utc::now(),
            self.references.as_mut(),
            sink,
        )?;
        self.publish(checkout.cleared);
        Ok(checkout.order)
    }

    pub fn submit_contact(
        &self,
        details: ContactDetails,
        sink: &mut dyn ContactSink,
    ) -> DomainResult<ContactRecord> {
        submit_contact(details, Utc::now(), sink)
    }

    /// Publish failures are logged; the cart has already changed.
    fn publish(&self, event: CartEvent) {
        let event_type = event.event_type();
        if let Err(error) = self.bus.publish(event) {
            tracing::warn!(event_type, ?error, "failed to publish cart event");
        }
    }
}
