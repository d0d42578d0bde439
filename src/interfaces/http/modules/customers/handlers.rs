//! Customer REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::CustomerDto;
use crate::domain::Customer;
use crate::interfaces::http::common::{parse_id, ApiError, HypermediaResponse, JsonBody};
use crate::interfaces::http::state::ApiState;

const COLLECTION: &str = "customers";

#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Created", body = HypermediaResponse<CustomerDto>),
        (status = 400, description = "Undecodable body", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn create_customer(
    State(state): State<ApiState>,
    JsonBody(body): JsonBody<CustomerDto>,
) -> Result<Json<HypermediaResponse<CustomerDto>>, ApiError> {
    let mut customer = Customer::from(body);
    customer.id = state.customers.create(customer.clone()).await?;
    Ok(Json(HypermediaResponse::new(
        COLLECTION,
        customer.id,
        customer.into(),
    )))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = HypermediaResponse<CustomerDto>),
        (status = 400, description = "Invalid customer ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<HypermediaResponse<CustomerDto>>, ApiError> {
    let id = parse_id(&id, "customer")?;
    let customer = state.customers.get(id).await?;
    Ok(Json(HypermediaResponse::new(COLLECTION, id, customer.into())))
}

#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Replaced"),
        (status = 400, description = "Invalid customer ID or body", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn update_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<CustomerDto>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "customer")?;
    let mut customer = Customer::from(body);
    customer.id = id;
    state.customers.update(customer).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Invalid customer ID", body = String, content_type = "text/plain"),
        (status = 500, description = "Not found or storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn delete_customer(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "customer")?;
    state.customers.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = Vec<CustomerDto>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
pub async fn list_customers(
    State(state): State<ApiState>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state.customers.list().await?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::interfaces::http::router::test_support::{memory_app, send, sqlite_app};

    #[tokio::test]
    async fn customers_may_share_an_email() {
        let app = memory_app();
        for first in ["Ada", "Grace"] {
            let (status, _) = send(
                &app,
                "POST",
                "/customers",
                Some(json!({"FirstName": first, "Email": "shared@example.com"})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, body) = send(&app, "GET", "/customers", None).await;
        let customers: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(customers.len(), 2);
    }

    async fn put_replaces_whole_customer(app: axum::Router) {
        send(
            &app,
            "POST",
            "/customers",
            Some(json!({
                "FirstName": "Ada",
                "LastName": "Lovelace",
                "Email": "ada@example.com",
                "Phone": "+44 20 0000 0000"
            })),
        )
        .await;

        let (status, body) = send(
            &app,
            "PUT",
            "/customers/1",
            Some(json!({"ID": 7, "FirstName": "Ada", "LastName": "King", "Email": "ada@example.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        let (status, body) = send(&app, "GET", "/customers/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let fetched: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            fetched["data"],
            json!({
                "ID": 1,
                "FirstName": "Ada",
                "LastName": "King",
                "Email": "ada@example.com",
                "Phone": ""
            })
        );

        let (status, _) = send(&app, "PUT", "/customers/42", Some(json!({"FirstName": "Nobody"}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn put_replaces_whole_customer_in_memory() {
        put_replaces_whole_customer(memory_app()).await;
    }

    #[tokio::test]
    async fn put_replaces_whole_customer_on_sqlite() {
        put_replaces_whole_customer(sqlite_app().await).await;
    }

    #[tokio::test]
    async fn delete_removes_the_customer() {
        let app = memory_app();
        send(&app, "POST", "/customers", Some(json!({"FirstName": "Ada"}))).await;

        let (status, _) = send(&app, "DELETE", "/customers/1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, text) = send(&app, "GET", "/customers/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(text, "Not found: Customer with id=1");
    }
}
