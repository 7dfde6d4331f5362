use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct SuccessResponse { pub success: bool }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct BusinessDoc { pub name: String, pub icon: Option<String> }

#[derive(ToSchema)]
pub struct OfficerDoc {
    pub id: String,
    pub full_name: Option<String>,
    pub territory: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub business: Option<String>,
}

#[derive(ToSchema)]
pub struct CustomerDoc {
    pub id: String,
    pub customer_no: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub address: Option<String>,
    pub model: Option<String>,
    pub sale_type: Option<String>,
    pub officer_id: Option<String>,
    pub officer_name: Option<String>,
    pub business: Option<String>,
    /// Stored as "No" when omitted or empty
    pub visit_completed: Option<String>,
    pub customer_type: Option<String>,
    pub field_visit_notes: Option<String>,
    pub booking_info: Option<String>,
    pub delivery_info: Option<String>,
}

#[derive(ToSchema)]
pub struct InitDoc {
    pub businesses: Vec<String>,
    pub icons: BTreeMap<String, String>,
    pub officers: Vec<OfficerDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::init::get_init,
        crate::routes::customers::list,
        crate::routes::customers::upsert,
        crate::routes::customers::delete,
        crate::routes::officers::list,
        crate::routes::officers::upsert,
        crate::routes::officers::delete,
        crate::routes::businesses::upsert,
        crate::routes::businesses::delete,
    ),
    components(
        schemas(
            HealthResponse,
            SuccessResponse,
            ErrorResponse,
            BusinessDoc,
            OfficerDoc,
            CustomerDoc,
            InitDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "init"),
        (name = "customers"),
        (name = "officers"),
        (name = "businesses")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for p in [
            "/health",
            "/api/init",
            "/api/customers",
            "/api/customers/{id}",
            "/api/officers",
            "/api/officers/{id}",
            "/api/businesses",
            "/api/businesses/{name}",
        ] {
            assert!(paths.contains(&p), "missing {p} in {paths:?}");
        }
    }
}
