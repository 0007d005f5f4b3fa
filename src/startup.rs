use std::sync::Arc;

use crate::api;
use crate::cart::CartStore;
use crate::client::{ApiClient, HttpTransport, LoginRedirect, Transport};
use crate::configuration::Settings;
use crate::error::ConciergeError;
use crate::models::{FoodOrder, NewFoodOrder, NewOrderItem, OrderType, PaymentMethod, User};
use crate::session::AuthSession;
use crate::storage::{FileStorage, Storage};
use crate::Result;

/// Everything a dine-in/takeaway order needs besides the cart lines
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub table_number: Option<String>,
    pub room_number: Option<String>,
    pub special_requests: Option<String>,
}

/// Top-level container owning the stores and the API pipeline.
///
/// There are no ambient globals here: the session, the cart and the client
/// are constructed together, share one storage document, and are handed to
/// whatever layer sits on top. Dropping the container is the teardown.
pub struct Application {
    pub session: Arc<AuthSession>,
    pub cart: Arc<CartStore>,
    pub api: Arc<ApiClient>,
}

/// Wires the production pieces: file-backed storage and a `reqwest`
/// transport aimed at the configured API.
pub fn build_app(
    configuration: &Settings,
    redirect: Arc<dyn LoginRedirect>,
) -> Result<Application> {
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(configuration.storage.path.as_str()));
    let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(
        &configuration.api.base_url,
        configuration.api.timeout(),
    )?);
    Ok(build_app_with(storage, transport, redirect))
}

/// Same wiring with the seams exposed - the test suites inject in-memory
/// storage and scripted transports through here.
pub fn build_app_with(
    storage: Arc<dyn Storage>,
    transport: Arc<dyn Transport>,
    redirect: Arc<dyn LoginRedirect>,
) -> Application {
    let session = Arc::new(AuthSession::restore(storage.clone()));
    let cart = Arc::new(CartStore::restore(storage));
    let api = Arc::new(ApiClient::new(transport, session.clone(), redirect));
    Application { session, cart, api }
}

impl Application {
    /// Exchanges a Google ID token for this API's tokens and commits the
    /// result to the session store. From the next call onwards the pipeline
    /// authenticates with the new access token.
    #[tracing::instrument(skip(self, id_token))]
    pub async fn sign_in_with_google(&self, id_token: &str) -> Result<User> {
        let response = api::auth::google_sign_in(&self.api, id_token).await?;
        self.session.login(
            response.access_token,
            response.refresh_token,
            response.user.clone(),
        )?;
        Ok(response.user)
    }

    /// Submits the current cart as a food order and, only once the server
    /// has accepted it, clears the cart.
    #[tracing::instrument(skip(self, details))]
    pub async fn submit_cart_order(&self, details: OrderDetails) -> Result<FoodOrder> {
        let lines = self.cart.lines();
        if lines.is_empty() {
            return Err(ConciergeError::BadRequest("cart is empty".to_string()));
        }

        let order = NewFoodOrder {
            items: lines.iter().map(NewOrderItem::from).collect(),
            order_type: details.order_type,
            table_number: details.table_number,
            room_number: details.room_number,
            special_requests: details.special_requests,
            payment_method: details.payment_method,
        };

        let placed = api::food_orders::create(&self.api, &order).await?;
        self.cart.clear()?;
        Ok(placed)
    }
}
