/// Opaque catalog id of an ingredient (`data[]._id`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct IngredientId(String);

impl IngredientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct NewOrder {
    pub ingredients: Vec<IngredientId>,
}

impl NewOrder {
    pub fn new(ingredients: Vec<IngredientId>) -> Self {
        Self { ingredients }
    }
}

/// `order._id` and `order.number` of a freshly created order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub id: String,
    pub number: u64,
}
