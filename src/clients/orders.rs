use reqwest::{Method, Url};

use super::{ApiClient, ClientError};
use crate::{
    api_response::ApiResponse,
    domain::{AccessToken, IngredientId, NewOrder},
};

const INGREDIENTS_PATH: &str = "/api/ingredients";
const ORDERS_PATH: &str = "/api/orders";

/// Requests against `/api/ingredients` and `/api/orders`.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    api: ApiClient,
}

impl OrdersClient {
    pub fn new(base_url: Url, timeout: std::time::Duration) -> Self {
        Self {
            api: ApiClient::new(base_url, timeout),
        }
    }

    #[tracing::instrument(name = "Get the ingredient catalog", skip(self))]
    pub async fn get_ingredients(&self) -> Result<ApiResponse, ClientError> {
        let request = self.api.request(Method::GET, INGREDIENTS_PATH, None)?;
        self.api.send(request).await
    }

    /// Ids of the first `count` catalog entries (`data[i]._id`).
    ///
    /// Returns fewer ids when the catalog is shorter.
    pub async fn first_ingredient_ids(
        &self,
        count: usize,
    ) -> Result<Vec<IngredientId>, ClientError> {
        let catalog = self.get_ingredients().await?;
        Ok((0..count)
            .map_while(|i| catalog.str_at(&format!("data[{i}]._id")))
            .map(IngredientId::new)
            .collect())
    }

    #[tracing::instrument(
        name = "Create an order",
        skip(self, order, token),
        fields(ingredients = order.ingredients.len())
    )]
    pub async fn create_order(
        &self,
        order: &NewOrder,
        token: &AccessToken,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .api
            .request(Method::POST, ORDERS_PATH, Some(token))?
            .json(order);
        self.api.send(request).await
    }

    #[tracing::instrument(
        name = "Create an order without a token",
        skip(self, order),
        fields(ingredients = order.ingredients.len())
    )]
    pub async fn create_order_unauthorized(
        &self,
        order: &NewOrder,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .api
            .request(Method::POST, ORDERS_PATH, None)?
            .json(order);
        self.api.send(request).await
    }

    #[tracing::instrument(name = "Get the user's orders", skip(self, token))]
    pub async fn get_orders(&self, token: &AccessToken) -> Result<ApiResponse, ClientError> {
        let request = self.api.request(Method::GET, ORDERS_PATH, Some(token))?;
        self.api.send(request).await
    }

    #[tracing::instrument(name = "Get orders without a token", skip(self))]
    pub async fn get_orders_unauthorized(&self) -> Result<ApiResponse, ClientError> {
        let request = self.api.request(Method::GET, ORDERS_PATH, None)?;
        self.api.send(request).await
    }
}
